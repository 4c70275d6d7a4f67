use chartlife_types::{AlbumFilter, ExplicitFilter};
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExplicitArg {
    All,
    Explicit,
    Clean,
}

impl fmt::Display for ExplicitArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplicitArg::All => write!(f, "all"),
            ExplicitArg::Explicit => write!(f, "explicit"),
            ExplicitArg::Clean => write!(f, "clean"),
        }
    }
}

impl From<ExplicitArg> for ExplicitFilter {
    fn from(arg: ExplicitArg) -> Self {
        match arg {
            ExplicitArg::All => ExplicitFilter::All,
            ExplicitArg::Explicit => ExplicitFilter::Explicit,
            ExplicitArg::Clean => ExplicitFilter::Clean,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AlbumArg {
    All,
    Single,
    Album,
}

impl fmt::Display for AlbumArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumArg::All => write!(f, "all"),
            AlbumArg::Single => write!(f, "single"),
            AlbumArg::Album => write!(f, "album"),
        }
    }
}

impl From<AlbumArg> for AlbumFilter {
    fn from(arg: AlbumArg) -> Self {
        match arg {
            AlbumArg::All => AlbumFilter::All,
            AlbumArg::Single => AlbumFilter::Single,
            AlbumArg::Album => AlbumFilter::Album,
        }
    }
}

use crate::types::{AlbumArg, ExplicitArg, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chartlife")]
#[command(about = "Explore how songs enter, peak and exit a weekly Top-50 chart", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.chartlife", global = true)]
    pub data_dir: String,

    #[arg(
        long,
        global = true,
        help = "Dataset file to analyze (overrides config.toml)"
    )]
    pub dataset: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "all", global = true)]
    pub explicit: ExplicitArg,

    #[arg(long, default_value = "all", global = true)]
    pub album: AlbumArg,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full analytics page: metrics, distribution, song detail, comparisons
    /// and the top-10 tables
    Dashboard {
        #[arg(
            long,
            help = "Song to feature in the detail panel (defaults to the first id in the filtered view)"
        )]
        song: Option<String>,
    },

    /// Scalar metrics, lifecycle distribution and grouped means only
    Stats,

    Songs {
        #[command(subcommand)]
        command: SongsCommand,
    },

    Top {
        #[command(subcommand)]
        command: TopCommand,
    },
}

#[derive(Subcommand)]
pub enum SongsCommand {
    /// Distinct song ids present in the filtered view
    List,

    /// Lifecycle detail for one song of the filtered view
    Show { song_id: String },
}

#[derive(Subcommand)]
pub enum TopCommand {
    /// Songs with the longest chart runs
    Survivors {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Songs that reached their peak fastest
    Risers {
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

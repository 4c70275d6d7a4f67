use crate::record::LifecycleRecord;
use serde::Serialize;
use std::fmt;

/// Explicit-content filter axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplicitFilter {
    #[default]
    All,
    /// Keep rows where `is_explicit == true`.
    Explicit,
    /// Keep rows where `is_explicit == false`.
    Clean,
}

impl ExplicitFilter {
    pub fn matches(&self, record: &LifecycleRecord) -> bool {
        match self {
            ExplicitFilter::All => true,
            ExplicitFilter::Explicit => record.is_explicit,
            ExplicitFilter::Clean => !record.is_explicit,
        }
    }
}

impl fmt::Display for ExplicitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplicitFilter::All => write!(f, "all"),
            ExplicitFilter::Explicit => write!(f, "explicit"),
            ExplicitFilter::Clean => write!(f, "clean"),
        }
    }
}

/// Album-type filter axis. `Single` and `Album` compare against the lowercase
/// upstream vocabulary; values outside the vocabulary never match either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumFilter {
    #[default]
    All,
    Single,
    Album,
}

impl AlbumFilter {
    pub fn matches(&self, record: &LifecycleRecord) -> bool {
        match self {
            AlbumFilter::All => true,
            AlbumFilter::Single => record.album_type == "single",
            AlbumFilter::Album => record.album_type == "album",
        }
    }
}

impl fmt::Display for AlbumFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumFilter::All => write!(f, "all"),
            AlbumFilter::Single => write!(f, "single"),
            AlbumFilter::Album => write!(f, "album"),
        }
    }
}

/// The two filter axes composed with logical AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub explicit: ExplicitFilter,
    pub album: AlbumFilter,
}

impl FilterSelection {
    pub fn new(explicit: ExplicitFilter, album: AlbumFilter) -> Self {
        Self { explicit, album }
    }

    pub fn matches(&self, record: &LifecycleRecord) -> bool {
        self.explicit.matches(record) && self.album.matches(record)
    }
}

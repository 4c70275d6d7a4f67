use std::fmt;

/// Result type for chartlife-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading the dataset
#[derive(Debug)]
pub enum Error {
    /// IO operation failed (file missing or unreadable)
    Io(std::io::Error),

    /// Malformed delimited data or row deserialization failure
    Csv(csv::Error),

    /// Header row is present but required columns are absent
    MissingColumns(Vec<String>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::MissingColumns(columns) => write!(
                f,
                "dataset is missing required columns: {}",
                columns.join(", ")
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::MissingColumns(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

use std::fmt;

/// Result type for feedline-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or assembling a feed
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Feed file could not be parsed
    Parse(String),

    /// Feed file parsed but its contents are inconsistent
    InvalidFeed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(msg) => write!(f, "Feed parse error: {}", msg),
            Error::InvalidFeed(msg) => write!(f, "Invalid feed: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(_) | Error::InvalidFeed(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

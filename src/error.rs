//! Crate error types.

use std::fmt;

use crate::config::ConfigError;

/// Errors on the load-and-print path. Metric collection itself never fails.
#[derive(Debug)]
pub enum Error {
    /// Invalid configuration.
    Config(ConfigError),

    /// Reading the host export failed.
    Io { path: String, error: std::io::Error },

    /// Host export or JSON output could not be (de)serialized.
    Json(serde_json::Error),

    /// Prometheus registry or encoding error.
    Metrics(prometheus::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "configuration error: {}", e),
            Error::Io { path, error } => write!(f, "I/O error for '{}': {}", path, error),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Metrics(e) => write!(f, "metrics error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Io { error, .. } => Some(error),
            Error::Json(e) => Some(e),
            Error::Metrics(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<prometheus::Error> for Error {
    fn from(e: prometheus::Error) -> Self {
        Error::Metrics(e)
    }
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

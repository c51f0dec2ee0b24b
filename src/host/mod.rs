//! Upstream collaborators the collector reads from.
//!
//! A [`Host`] is whatever can answer the runtime questions a WordPress admin
//! page asks about itself: how many queries ran, how much memory was used,
//! what the query log recorded, how large the autoloaded options are.
//! [`HostReport`] answers them from a JSON export of those counters.

mod report;

use std::fmt;

pub use report::{AutoloadFlag, HostReport, StoredOption};

/// One entry from the host's query log.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryLogEntry {
    pub sql: String,
    /// Elapsed time in seconds.
    pub duration: f64,
    /// Call trace as reported by the host.
    pub caller: String,
}

impl QueryLogEntry {
    pub fn new(sql: impl Into<String>, duration: f64, caller: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            duration,
            caller: caller.into(),
        }
    }
}

/// Error reading a counter from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host does not expose this counter.
    Unavailable { what: &'static str },
    /// The host failed while producing the counter.
    Backend { what: &'static str, message: String },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Unavailable { what } => write!(f, "{} unavailable", what),
            HostError::Backend { what, message } => {
                write!(f, "failed to read {}: {}", what, message)
            }
        }
    }
}

impl std::error::Error for HostError {}

/// Read-only view of the runtime counters of one request.
///
/// Implementations must not mutate host state.
pub trait Host {
    /// Number of database queries executed so far.
    fn query_count(&self) -> Result<u64, HostError>;

    /// Peak memory used by the request, in bytes.
    fn memory_peak_usage(&self) -> Result<u64, HostError>;

    /// Configured memory limit in PHP ini shorthand (e.g. "256M").
    fn memory_limit(&self) -> Result<String, HostError>;

    /// Recorded queries. Only consulted when the query log is enabled.
    fn query_log(&self) -> Result<Vec<QueryLogEntry>, HostError>;

    /// Sum of the byte lengths of all autoloaded options.
    ///
    /// `Ok(None)` means the store answered but the aggregate was null.
    fn autoload_size(&self) -> Result<Option<u64>, HostError>;

    fn php_version(&self) -> String;

    fn mysql_version(&self) -> String;

    fn wp_version(&self) -> String;

    /// Whether a persistent object cache drop-in is active.
    fn object_cache_active(&self) -> bool;
}

impl<H: Host + ?Sized> Host for &H {
    fn query_count(&self) -> Result<u64, HostError> {
        (**self).query_count()
    }

    fn memory_peak_usage(&self) -> Result<u64, HostError> {
        (**self).memory_peak_usage()
    }

    fn memory_limit(&self) -> Result<String, HostError> {
        (**self).memory_limit()
    }

    fn query_log(&self) -> Result<Vec<QueryLogEntry>, HostError> {
        (**self).query_log()
    }

    fn autoload_size(&self) -> Result<Option<u64>, HostError> {
        (**self).autoload_size()
    }

    fn php_version(&self) -> String {
        (**self).php_version()
    }

    fn mysql_version(&self) -> String {
        (**self).mysql_version()
    }

    fn wp_version(&self) -> String {
        (**self).wp_version()
    }

    fn object_cache_active(&self) -> bool {
        (**self).object_cache_active()
    }
}

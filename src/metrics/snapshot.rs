use serde::Serialize;

use super::memory::memory_percent;

/// A query that ran longer than the slow-query threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlowQueryRecord {
    pub sql: String,
    pub duration_seconds: f64,
    pub caller: String,
}

impl SlowQueryRecord {
    pub fn new(sql: impl Into<String>, duration_seconds: f64, caller: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            duration_seconds,
            caller: caller.into(),
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_seconds * 1000.0
    }
}

/// Point-in-time runtime counters for one request.
///
/// Built once by the collector (or through the `with_*` methods in tests);
/// derived fields are recomputed whenever their inputs are set, so the
/// record is always self-consistent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    query_count: u64,
    memory_used_bytes: u64,
    memory_limit_bytes: u64,
    memory_percent: f64,
    slow_queries: Vec<SlowQueryRecord>,
    slow_query_count: usize,
    autoload_size_bytes: u64,
    php_version: String,
    mysql_version: String,
    wp_version: String,
    object_cache_active: bool,
    query_log_enabled: bool,
}

impl MetricsSnapshot {
    pub fn with_query_count(mut self, count: u64) -> Self {
        self.query_count = count;
        self
    }

    /// Set memory usage and limit; `memory_percent` follows.
    pub fn with_memory(mut self, used_bytes: u64, limit_bytes: u64) -> Self {
        self.memory_used_bytes = used_bytes;
        self.memory_limit_bytes = limit_bytes;
        self.memory_percent = memory_percent(used_bytes, limit_bytes);
        self
    }

    /// Set the slow queries, expected sorted by duration descending.
    pub fn with_slow_queries(mut self, slow_queries: Vec<SlowQueryRecord>) -> Self {
        self.slow_query_count = slow_queries.len();
        self.slow_queries = slow_queries;
        self
    }

    pub fn with_query_log(mut self, enabled: bool) -> Self {
        self.query_log_enabled = enabled;
        self
    }

    pub fn with_autoload_size(mut self, bytes: u64) -> Self {
        self.autoload_size_bytes = bytes;
        self
    }

    pub fn with_versions(
        mut self,
        php: impl Into<String>,
        mysql: impl Into<String>,
        wp: impl Into<String>,
    ) -> Self {
        self.php_version = php.into();
        self.mysql_version = mysql.into();
        self.wp_version = wp.into();
        self
    }

    pub fn with_object_cache(mut self, active: bool) -> Self {
        self.object_cache_active = active;
        self
    }

    pub fn query_count(&self) -> u64 {
        self.query_count
    }

    pub fn memory_used_bytes(&self) -> u64 {
        self.memory_used_bytes
    }

    pub fn memory_limit_bytes(&self) -> u64 {
        self.memory_limit_bytes
    }

    /// Used / limit × 100, or 0 when the limit is unknown.
    pub fn memory_percent(&self) -> f64 {
        self.memory_percent
    }

    pub fn slow_queries(&self) -> &[SlowQueryRecord] {
        &self.slow_queries
    }

    pub fn slow_query_count(&self) -> usize {
        self.slow_query_count
    }

    pub fn autoload_size_bytes(&self) -> u64 {
        self.autoload_size_bytes
    }

    pub fn autoload_size_kb(&self) -> f64 {
        self.autoload_size_bytes as f64 / 1024.0
    }

    pub fn php_version(&self) -> &str {
        &self.php_version
    }

    pub fn mysql_version(&self) -> &str {
        &self.mysql_version
    }

    pub fn wp_version(&self) -> &str {
        &self.wp_version
    }

    pub fn object_cache_active(&self) -> bool {
        self.object_cache_active
    }

    pub fn query_log_enabled(&self) -> bool {
        self.query_log_enabled
    }
}

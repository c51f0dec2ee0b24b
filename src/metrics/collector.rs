use std::time::Instant;

use tracing::{debug, warn};

use super::memory::parse_memory_limit;
use super::queries::extract_slow_queries;
use super::snapshot::MetricsSnapshot;
use crate::config::MonitorConfig;
use crate::host::{Host, HostError};

/// Gathers a [`MetricsSnapshot`] from a [`Host`].
///
/// Collection never fails: a counter the host cannot provide is logged
/// and recorded as zero (or empty).
pub struct MetricsCollector<H> {
    host: H,
    config: MonitorConfig,
}

impl<H: Host> MetricsCollector<H> {
    pub fn new(host: H, config: MonitorConfig) -> Self {
        Self { host, config }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Read the host counters once.
    pub fn collect(&self) -> MetricsSnapshot {
        let start = Instant::now();

        let query_count = or_default(self.host.query_count());
        let memory_used = or_default(self.host.memory_peak_usage());
        let memory_limit = self.collect_memory_limit();
        let autoload_size = or_default(self.host.autoload_size()).unwrap_or(0);

        let slow_queries = if self.config.query_log_enabled {
            let log = or_default(self.host.query_log());
            debug!(logged = log.len(), "Scanning query log");
            extract_slow_queries(log, self.config.slow_query_threshold_secs())
        } else {
            Vec::new()
        };

        let snapshot = MetricsSnapshot::default()
            .with_query_count(query_count)
            .with_memory(memory_used, memory_limit)
            .with_slow_queries(slow_queries)
            .with_query_log(self.config.query_log_enabled)
            .with_autoload_size(autoload_size)
            .with_versions(
                self.host.php_version(),
                self.host.mysql_version(),
                self.host.wp_version(),
            )
            .with_object_cache(self.host.object_cache_active());

        debug!(
            queries = snapshot.query_count(),
            memory_percent = snapshot.memory_percent(),
            slow_queries = snapshot.slow_query_count(),
            autoload_bytes = snapshot.autoload_size_bytes(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Metrics collected"
        );

        snapshot
    }

    fn collect_memory_limit(&self) -> u64 {
        let raw = or_default(self.host.memory_limit());
        let bytes = parse_memory_limit(&raw);
        if bytes == 0 && !raw.is_empty() {
            debug!(memory_limit = %raw, "Unrecognized memory limit, treating as 0");
        }
        bytes
    }
}

fn or_default<T: Default>(result: Result<T, HostError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Host metric unavailable, using default");
            T::default()
        }
    }
}

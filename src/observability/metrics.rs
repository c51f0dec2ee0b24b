//! Prometheus exposition of a dashboard report.
//!
//! Gauges mirror the snapshot counters; `wp_perf_metric_status` is a state
//! set with one series per (metric, status) pair, 1 for the current status.

use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

use crate::dashboard::DashboardReport;
use crate::health::StatusLevel;

const STATUSES: [StatusLevel; 4] = [
    StatusLevel::Good,
    StatusLevel::Warning,
    StatusLevel::Critical,
    StatusLevel::Neutral,
];

/// Prometheus registry holding the gauges of one report.
pub struct SnapshotMetrics {
    registry: Registry,

    /// Database queries executed
    pub query_count: Gauge,

    /// Peak memory usage in bytes
    pub memory_used_bytes: Gauge,

    /// Memory limit in bytes (0 when unknown)
    pub memory_limit_bytes: Gauge,

    /// Peak memory as a percentage of the limit
    pub memory_percent: Gauge,

    /// Queries over the slow-query threshold
    pub slow_queries: Gauge,

    /// Size of autoloaded options in bytes
    pub autoload_bytes: Gauge,

    /// 1 when a persistent object cache is active
    pub object_cache_active: Gauge,

    /// Dashboard health score (0-100)
    pub health_score: Gauge,

    /// Per-metric status state set
    pub metric_status: GaugeVec,

    /// Platform versions, always 1
    pub info: GaugeVec,
}

impl SnapshotMetrics {
    /// Create a registry with all gauges registered.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let query_count = Gauge::new("wp_perf_query_count", "Database queries executed")?;
        registry.register(Box::new(query_count.clone()))?;

        let memory_used_bytes =
            Gauge::new("wp_perf_memory_used_bytes", "Peak memory usage in bytes")?;
        registry.register(Box::new(memory_used_bytes.clone()))?;

        let memory_limit_bytes = Gauge::new(
            "wp_perf_memory_limit_bytes",
            "Memory limit in bytes (0 when unknown)",
        )?;
        registry.register(Box::new(memory_limit_bytes.clone()))?;

        let memory_percent = Gauge::new(
            "wp_perf_memory_percent",
            "Peak memory as a percentage of the limit",
        )?;
        registry.register(Box::new(memory_percent.clone()))?;

        let slow_queries = Gauge::new("wp_perf_slow_queries", "Queries over the slow threshold")?;
        registry.register(Box::new(slow_queries.clone()))?;

        let autoload_bytes =
            Gauge::new("wp_perf_autoload_bytes", "Size of autoloaded options in bytes")?;
        registry.register(Box::new(autoload_bytes.clone()))?;

        let object_cache_active = Gauge::new(
            "wp_perf_object_cache_active",
            "1 when a persistent object cache is active",
        )?;
        registry.register(Box::new(object_cache_active.clone()))?;

        let health_score = Gauge::new("wp_perf_health_score", "Dashboard health score (0-100)")?;
        registry.register(Box::new(health_score.clone()))?;

        let metric_status = GaugeVec::new(
            Opts::new("wp_perf_metric_status", "Current status of each metric"),
            &["metric", "status"],
        )?;
        registry.register(Box::new(metric_status.clone()))?;

        let info = GaugeVec::new(
            Opts::new("wp_perf_info", "Platform versions"),
            &["php", "mysql", "wordpress"],
        )?;
        registry.register(Box::new(info.clone()))?;

        Ok(Self {
            registry,
            query_count,
            memory_used_bytes,
            memory_limit_bytes,
            memory_percent,
            slow_queries,
            autoload_bytes,
            object_cache_active,
            health_score,
            metric_status,
            info,
        })
    }

    /// Set every gauge from a report.
    pub fn record(&self, report: &DashboardReport) {
        let snapshot = &report.snapshot;

        self.query_count.set(snapshot.query_count() as f64);
        self.memory_used_bytes.set(snapshot.memory_used_bytes() as f64);
        self.memory_limit_bytes.set(snapshot.memory_limit_bytes() as f64);
        self.memory_percent.set(snapshot.memory_percent());
        self.slow_queries.set(snapshot.slow_query_count() as f64);
        self.autoload_bytes.set(snapshot.autoload_size_bytes() as f64);
        self.object_cache_active
            .set(if snapshot.object_cache_active() { 1.0 } else { 0.0 });
        self.health_score.set(report.health_score as f64);

        for card in &report.cards {
            let Some(metric) = card.metric else { continue };
            for status in STATUSES {
                let value = if card.status == status { 1.0 } else { 0.0 };
                self.metric_status
                    .with_label_values(&[metric.as_str(), status.as_str()])
                    .set(value);
            }
        }

        self.info
            .with_label_values(&[
                snapshot.php_version(),
                snapshot.mysql_version(),
                snapshot.wp_version(),
            ])
            .set(1.0);
    }

    /// Export metrics in Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Get the Prometheus registry (for custom metrics).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

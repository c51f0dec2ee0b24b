//! Runtime metrics collection.
//!
//! The collector reads the host once per page view and produces an
//! immutable [`MetricsSnapshot`]:
//!
//! ```rust,ignore
//! use wp_perf_monitor::config::MonitorConfig;
//! use wp_perf_monitor::host::HostReport;
//! use wp_perf_monitor::metrics::MetricsCollector;
//!
//! let host = HostReport::from_json(&export)?;
//! let snapshot = MetricsCollector::new(&host, MonitorConfig::from_env()?).collect();
//! println!("{} queries, {:.1}% memory", snapshot.query_count(), snapshot.memory_percent());
//! ```

mod collector;
pub mod memory;
pub mod queries;
mod snapshot;

pub use collector::MetricsCollector;
pub use memory::parse_memory_limit;
pub use queries::extract_slow_queries;
pub use snapshot::{MetricsSnapshot, SlowQueryRecord};

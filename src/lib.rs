//! wp_perf_monitor - WordPress performance dashboard core.
//!
//! Collects a point-in-time metrics snapshot from a WordPress host and
//! classifies each metric into a status card for an admin dashboard.
//!
//! # Features
//!
//! - **Metrics Collector**: query count, peak memory against `memory_limit`,
//!   slow queries from the `SAVEQUERIES` log, autoloaded options size
//! - **Health Classifier**: pure threshold rules producing good/warning/critical cards
//! - **Dashboard**: overall status, health score and recommendations
//! - **Output**: text, JSON and Prometheus exposition
//!
//! # Architecture
//!
//! The collector reads from a pluggable [`host::Host`]:
//!
//! - `HostReport` - JSON export of a WordPress request (the CLI input)
//! - custom implementations wired to a live runtime
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_perf_monitor::{Dashboard, HostReport, MonitorConfig};
//!
//! let host = HostReport::from_json(&export)?;
//! let report = Dashboard::new(&host, MonitorConfig::default()).report();
//! println!("{}", wp_perf_monitor::render::text(&report, 10));
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 (abc12345-dirty)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod host;
pub mod logging;
pub mod metrics;
pub mod observability;
pub mod render;

// Re-exports for convenience
pub use config::{Config, MonitorConfig};
pub use dashboard::{Dashboard, DashboardReport};
pub use error::{Error, Result};
pub use health::{classify, Metric, StatusCard, StatusLevel};
pub use host::{Host, HostReport};
pub use metrics::{MetricsCollector, MetricsSnapshot};

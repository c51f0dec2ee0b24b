//! Observability exports.
//!
//! # Prometheus
//!
//! ```rust,ignore
//! use wp_perf_monitor::observability::SnapshotMetrics;
//!
//! let metrics = SnapshotMetrics::new()?;
//! metrics.record(&report);
//! println!("{}", metrics.export()?);
//! ```

pub mod metrics;

pub use metrics::SnapshotMetrics;

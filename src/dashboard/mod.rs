//! Dashboard assembly.
//!
//! Ties the collector and classifier together for one page view:
//!
//! ```rust,ignore
//! use wp_perf_monitor::dashboard::Dashboard;
//!
//! let dashboard = Dashboard::new(&host, config.monitor.clone());
//! let report = dashboard.report();
//! println!("{}", wp_perf_monitor::render::text(&report, 10));
//! ```

mod recommender;
mod report;

pub use recommender::{Priority, Recommendation, RecommendationEngine};
pub use report::{DashboardReport, EnvironmentRow};

use tracing::info;

use crate::config::MonitorConfig;
use crate::host::Host;
use crate::metrics::MetricsCollector;

/// Builds a [`DashboardReport`] from a host on demand.
pub struct Dashboard<H> {
    collector: MetricsCollector<H>,
}

impl<H: Host> Dashboard<H> {
    pub fn new(host: H, config: MonitorConfig) -> Self {
        Self {
            collector: MetricsCollector::new(host, config),
        }
    }

    /// Collect, classify and assemble a fresh report.
    pub fn report(&self) -> DashboardReport {
        let snapshot = self.collector.collect();
        let report = DashboardReport::build(snapshot);

        info!(
            report_id = %report.report_id,
            overall = %report.overall,
            health_score = report.health_score,
            recommendations = report.recommendations.len(),
            "Dashboard report built"
        );

        report
    }
}

//! Presentation of dashboard reports.
//!
//! Prometheus exposition lives in [`crate::observability`].

mod text;

pub use text::text;

use crate::dashboard::DashboardReport;

/// Render the report as pretty-printed JSON.
pub fn json(report: &DashboardReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

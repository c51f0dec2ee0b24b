//! Health status types for classified metrics.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Health level of a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Good,
    Warning,
    Critical,
    /// Not measured (e.g. the query log is off).
    #[default]
    Neutral,
}

impl StatusLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Neutral => "neutral",
        }
    }

    /// Rank for worst-of aggregation: neutral < good < warning < critical.
    pub fn severity(&self) -> u8 {
        match self {
            Self::Neutral => 0,
            Self::Good => 1,
            Self::Warning => 2,
            Self::Critical => 3,
        }
    }

    /// True for warning and critical.
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Warning | Self::Critical)
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics tracked on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    #[serde(rename = "query_count")]
    QueryCount,
    #[serde(rename = "memory_percent")]
    MemoryUsage,
    #[serde(rename = "slow_query_count")]
    SlowQueries,
    #[serde(rename = "autoload_size_kb")]
    AutoloadSize,
    #[serde(rename = "object_cache")]
    ObjectCache,
}

impl Metric {
    /// Every metric, in dashboard order.
    pub const ALL: [Metric; 5] = [
        Metric::QueryCount,
        Metric::MemoryUsage,
        Metric::SlowQueries,
        Metric::AutoloadSize,
        Metric::ObjectCache,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QueryCount => "query_count",
            Self::MemoryUsage => "memory_percent",
            Self::SlowQueries => "slow_query_count",
            Self::AutoloadSize => "autoload_size_kb",
            Self::ObjectCache => "object_cache",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::QueryCount => "Database Queries",
            Self::MemoryUsage => "Memory Usage",
            Self::SlowQueries => "Slow Queries",
            Self::AutoloadSize => "Autoloaded Options",
            Self::ObjectCache => "Object Cache",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a metric name that is not tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric: {}", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// A classified metric, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusCard {
    /// Metric this card describes (None for the empty card)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
    pub title: String,
    /// Formatted value, e.g. "42" or "45.3%"
    pub value: String,
    pub description: String,
    pub status: StatusLevel,
    /// Fill level for a progress bar, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl StatusCard {
    pub fn new(
        metric: Metric,
        value: impl Into<String>,
        description: impl Into<String>,
        status: StatusLevel,
    ) -> Self {
        Self {
            metric: Some(metric),
            title: metric.title().to_string(),
            value: value.into(),
            description: description.into(),
            status,
            progress: None,
        }
    }

    /// Attach a progress value, clamped to 0-100.
    pub fn with_progress(mut self, percent: f64) -> Self {
        let clamped = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        self.progress = Some(clamped);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
        }
        assert_eq!(
            "cpu_load".parse::<Metric>(),
            Err(UnknownMetric("cpu_load".into()))
        );
    }

    #[test]
    fn test_severity_order() {
        assert!(StatusLevel::Critical.severity() > StatusLevel::Warning.severity());
        assert!(StatusLevel::Warning.severity() > StatusLevel::Good.severity());
        assert!(StatusLevel::Good.severity() > StatusLevel::Neutral.severity());
        assert!(!StatusLevel::Neutral.needs_attention());
        assert!(StatusLevel::Warning.needs_attention());
    }

    #[test]
    fn test_progress_clamped() {
        let card = StatusCard::new(Metric::MemoryUsage, "120%", "", StatusLevel::Critical);
        assert_eq!(card.clone().with_progress(120.0).progress, Some(100.0));
        assert_eq!(card.clone().with_progress(-3.0).progress, Some(0.0));
        assert_eq!(card.with_progress(f64::NAN).progress, Some(0.0));
    }

    #[test]
    fn test_card_serialization() {
        let card = StatusCard::new(Metric::QueryCount, "42", "ok", StatusLevel::Good);
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["metric"], "query_count");
        assert_eq!(json["status"], "good");
        assert!(json.get("progress").is_none());

        let empty = serde_json::to_value(StatusCard::default()).unwrap();
        assert!(empty.get("metric").is_none());
        assert_eq!(empty["status"], "neutral");
    }
}

//! Threshold classification of metrics.
//!
//! Every function here is pure: the same snapshot always yields the same card.

use super::format::{format_bytes, format_percent, plural};
use super::status::{Metric, StatusCard, StatusLevel};
use crate::metrics::MetricsSnapshot;

/// Fixed classification thresholds. Escalation uses strict `>`.
pub struct Thresholds;

impl Thresholds {
    pub const QUERY_COUNT_WARNING: u64 = 100;
    pub const QUERY_COUNT_CRITICAL: u64 = 200;
    pub const MEMORY_WARNING_PCT: f64 = 60.0;
    pub const MEMORY_CRITICAL_PCT: f64 = 80.0;
    pub const SLOW_QUERY_CRITICAL: usize = 5;
    pub const AUTOLOAD_EXCELLENT_KB: f64 = 300.0;
    pub const AUTOLOAD_WARNING_KB: f64 = 500.0;
    pub const AUTOLOAD_CRITICAL_KB: f64 = 800.0;
}

/// Classify one metric of a snapshot.
pub fn classify(metric: Metric, snapshot: &MetricsSnapshot) -> StatusCard {
    match metric {
        Metric::QueryCount => query_count_card(snapshot),
        Metric::MemoryUsage => memory_card(snapshot),
        Metric::SlowQueries => slow_queries_card(snapshot),
        Metric::AutoloadSize => autoload_card(snapshot),
        Metric::ObjectCache => object_cache_card(snapshot),
    }
}

/// Classify by metric name; unknown names get an empty neutral card.
pub fn classify_named(name: &str, snapshot: &MetricsSnapshot) -> StatusCard {
    name.parse::<Metric>()
        .map(|metric| classify(metric, snapshot))
        .unwrap_or_default()
}

/// One card per metric, in [`Metric::ALL`] order.
pub fn classify_all(snapshot: &MetricsSnapshot) -> Vec<StatusCard> {
    Metric::ALL
        .iter()
        .map(|&metric| classify(metric, snapshot))
        .collect()
}

pub fn query_count_level(count: u64) -> StatusLevel {
    if count > Thresholds::QUERY_COUNT_CRITICAL {
        StatusLevel::Critical
    } else if count > Thresholds::QUERY_COUNT_WARNING {
        StatusLevel::Warning
    } else {
        StatusLevel::Good
    }
}

pub fn memory_level(percent: f64) -> StatusLevel {
    if percent > Thresholds::MEMORY_CRITICAL_PCT {
        StatusLevel::Critical
    } else if percent > Thresholds::MEMORY_WARNING_PCT {
        StatusLevel::Warning
    } else {
        StatusLevel::Good
    }
}

pub fn slow_query_level(count: usize, query_log_enabled: bool) -> StatusLevel {
    if !query_log_enabled {
        StatusLevel::Neutral
    } else if count > Thresholds::SLOW_QUERY_CRITICAL {
        StatusLevel::Critical
    } else if count > 0 {
        StatusLevel::Warning
    } else {
        StatusLevel::Good
    }
}

pub fn autoload_level(size_kb: f64) -> StatusLevel {
    if size_kb > Thresholds::AUTOLOAD_CRITICAL_KB {
        StatusLevel::Critical
    } else if size_kb > Thresholds::AUTOLOAD_WARNING_KB {
        StatusLevel::Warning
    } else {
        StatusLevel::Good
    }
}

fn query_count_card(snapshot: &MetricsSnapshot) -> StatusCard {
    let count = snapshot.query_count();
    let status = query_count_level(count);
    let description = match status {
        StatusLevel::Critical => "Very high query count. Page generation is likely slowed by the database.",
        StatusLevel::Warning => "Query count is elevated. Consider caching repeated lookups.",
        _ => "Query count is within a healthy range.",
    };
    StatusCard::new(Metric::QueryCount, count.to_string(), description, status)
}

fn memory_card(snapshot: &MetricsSnapshot) -> StatusCard {
    let percent = snapshot.memory_percent();
    let status = memory_level(percent);
    let summary = match status {
        StatusLevel::Critical => "Memory usage is close to the limit",
        StatusLevel::Warning => "Memory usage is elevated",
        _ => "Memory usage is healthy",
    };

    let used = format_bytes(snapshot.memory_used_bytes());
    let description = if snapshot.memory_limit_bytes() == 0 {
        format!("{} ({} used, limit unknown).", summary, used)
    } else {
        format!(
            "{} ({} of {}).",
            summary,
            used,
            format_bytes(snapshot.memory_limit_bytes())
        )
    };

    StatusCard::new(Metric::MemoryUsage, format_percent(percent), description, status)
        .with_progress(percent)
}

fn slow_queries_card(snapshot: &MetricsSnapshot) -> StatusCard {
    let count = snapshot.slow_query_count();
    let status = slow_query_level(count, snapshot.query_log_enabled());
    let (value, description) = match status {
        StatusLevel::Neutral => (
            "N/A".to_string(),
            "Query logging is disabled. Enable SAVEQUERIES to detect slow queries.".to_string(),
        ),
        StatusLevel::Good => (
            "0".to_string(),
            "No slow queries recorded.".to_string(),
        ),
        StatusLevel::Warning => (
            count.to_string(),
            format!("{} slow {} recorded.", count, plural(count, "query", "queries")),
        ),
        StatusLevel::Critical => (
            count.to_string(),
            format!("{} slow queries recorded. Review indexes and query patterns.", count),
        ),
    };
    StatusCard::new(Metric::SlowQueries, value, description, status)
}

fn autoload_card(snapshot: &MetricsSnapshot) -> StatusCard {
    let size_kb = snapshot.autoload_size_kb();
    let status = autoload_level(size_kb);
    let description = match status {
        StatusLevel::Critical => "Critical: autoloaded options are very large and load on every request.",
        StatusLevel::Warning => "Warning: autoloaded options are large. Review plugins that autoload data.",
        _ if size_kb <= Thresholds::AUTOLOAD_EXCELLENT_KB => "Excellent: autoloaded options are small.",
        _ => "Good: autoloaded options are within acceptable limits.",
    };
    StatusCard::new(
        Metric::AutoloadSize,
        format!("{:.1} KB", size_kb),
        description,
        status,
    )
}

fn object_cache_card(snapshot: &MetricsSnapshot) -> StatusCard {
    if snapshot.object_cache_active() {
        StatusCard::new(
            Metric::ObjectCache,
            "Active",
            "A persistent object cache is in use.",
            StatusLevel::Good,
        )
    } else {
        StatusCard::new(
            Metric::ObjectCache,
            "Inactive",
            "No persistent object cache detected.",
            StatusLevel::Neutral,
        )
    }
}

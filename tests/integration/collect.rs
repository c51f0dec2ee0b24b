//! Collection from a host export on disk.

use std::time::Duration;

use crate::helpers::*;
use wp_perf_monitor::MetricsCollector;

/// Slow queries are those over 100ms, slowest first
#[test]
fn test_slow_queries_sorted_descending() {
    let file = write_export(BUSY_PAGE);
    let host = load_export(&file);
    let snapshot = MetricsCollector::new(&host, monitor(true)).collect();

    let durations: Vec<f64> = snapshot
        .slow_queries()
        .iter()
        .map(|q| q.duration_seconds)
        .collect();

    assert_eq!(durations, vec![0.30, 0.15]);
    assert_eq!(snapshot.slow_query_count(), 2);
    assert_eq!(snapshot.slow_queries()[0].caller, "update_meta_cache");
}

/// With the query log disabled nothing is scanned
#[test]
fn test_query_log_disabled() {
    let file = write_export(BUSY_PAGE);
    let host = load_export(&file);
    let snapshot = MetricsCollector::new(&host, monitor(false)).collect();

    assert!(snapshot.slow_queries().is_empty());
    assert!(!snapshot.query_log_enabled());
}

/// A higher threshold drops the 150ms query
#[test]
fn test_custom_threshold() {
    let file = write_export(BUSY_PAGE);
    let host = load_export(&file);
    let snapshot =
        MetricsCollector::new(&host, monitor_with_threshold(Duration::from_millis(200))).collect();

    assert_eq!(snapshot.slow_query_count(), 1);
    assert_eq!(snapshot.slow_queries()[0].duration_ms(), 300.0);
}

/// Memory percent is computed against the parsed limit
#[test]
fn test_memory_from_export() {
    let file = write_export(BUSY_PAGE);
    let host = load_export(&file);
    let snapshot = MetricsCollector::new(&host, monitor(false)).collect();

    assert_eq!(snapshot.query_count(), 150);
    assert_eq!(snapshot.memory_limit_bytes(), 268_435_456);
    assert!((snapshot.memory_percent() - 77.858).abs() < 0.001);
    assert_eq!(snapshot.autoload_size_kb(), 600.0);
    assert_eq!(snapshot.wp_version(), "6.4.2");
}

/// Unlimited memory (-1) means unknown limit and 0%
#[test]
fn test_unlimited_memory_limit() {
    let file = write_export(r#"{"num_queries": 3, "memory_peak_usage": 1048576, "memory_limit": "-1"}"#);
    let host = load_export(&file);
    let snapshot = MetricsCollector::new(&host, monitor(false)).collect();

    assert_eq!(snapshot.memory_limit_bytes(), 0);
    assert_eq!(snapshot.memory_percent(), 0.0);
}

/// An empty export still yields a snapshot of zeros
#[test]
fn test_empty_export() {
    let file = write_export("{}");
    let host = load_export(&file);
    let snapshot = MetricsCollector::new(&host, monitor(true)).collect();

    assert_eq!(snapshot.query_count(), 0);
    assert_eq!(snapshot.memory_used_bytes(), 0);
    assert_eq!(snapshot.autoload_size_bytes(), 0);
    assert!(snapshot.slow_queries().is_empty());
    assert_eq!(snapshot.php_version(), "");
}

/// Autoload size is summed from the options table when not precomputed
#[test]
fn test_autoload_from_options() {
    let file = write_export(
        r#"{"options": [
            {"name": "siteurl", "value": "https://example.com", "autoload": "yes"},
            {"name": "widget_cache", "value": "abc", "autoload": "no"}
        ]}"#,
    );
    let host = load_export(&file);
    let snapshot = MetricsCollector::new(&host, monitor(false)).collect();

    assert_eq!(snapshot.autoload_size_bytes(), 19);
}

/// A malformed query entry or a stringified counter keeps the rest of the export
#[test]
fn test_partial_export_still_collects() {
    let file = write_export(
        r#"{
            "num_queries": "42",
            "memory_peak_usage": 134217728,
            "memory_limit": "256M",
            "queries": [["SELECT 1", 0.25, "wp_head"], ["SELECT 2"]],
            "autoload_bytes": "nope"
        }"#,
    );
    let host = load_export(&file);
    let snapshot = MetricsCollector::new(&host, monitor(true)).collect();

    assert_eq!(snapshot.query_count(), 42);
    assert_eq!(snapshot.memory_percent(), 50.0);
    assert_eq!(snapshot.slow_query_count(), 1);
    assert_eq!(snapshot.slow_queries()[0].sql, "SELECT 1");
    assert_eq!(snapshot.autoload_size_bytes(), 0);
}

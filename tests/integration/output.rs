//! Rendered output formats.

use crate::helpers::*;
use wp_perf_monitor::observability::SnapshotMetrics;
use wp_perf_monitor::render;

#[test]
fn test_text_output() {
    let report = report_for(BUSY_PAGE, monitor(true));
    let text = render::text(&report, 1);

    assert!(text.starts_with("WordPress Performance  [WARNING]  health 60/100"));
    assert!(text.contains("Database Queries"));
    assert!(text.contains("Slow Queries (top 1 of 2)"));
    assert!(text.contains("300.0ms"));
    assert!(!text.contains("150.0ms"));
    assert!(text.contains("[medium]"));
}

#[test]
fn test_text_output_without_slow_queries() {
    let report = report_for(BUSY_PAGE, monitor(false));
    let text = render::text(&report, 10);

    assert!(!text.contains("Slow Queries (top"));
    assert!(text.contains("[low] Slow queries are not being tracked"));
}

#[test]
fn test_json_output() {
    let report = report_for(BUSY_PAGE, monitor(true));
    let json = render::json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["overall"], "warning");
    assert_eq!(value["health_score"], 60);
    assert_eq!(value["cards"].as_array().unwrap().len(), 5);
    assert_eq!(value["cards"][2]["metric"], "slow_query_count");
    assert_eq!(value["snapshot"]["slow_queries"][0]["duration_seconds"], 0.30);
}

#[test]
fn test_prometheus_output() {
    let report = report_for(BUSY_PAGE, monitor(true));
    let metrics = SnapshotMetrics::new().unwrap();
    metrics.record(&report);
    let output = metrics.export().unwrap();

    assert!(output.contains("wp_perf_query_count 150"));
    assert!(output.contains("wp_perf_slow_queries 2"));
    assert!(output.contains("wp_perf_health_score 60"));
    assert!(output.contains(
        "wp_perf_metric_status{metric=\"object_cache\",status=\"neutral\"} 1"
    ));
}

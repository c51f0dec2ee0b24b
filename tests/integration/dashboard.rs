//! Classification and report assembly.

use crate::helpers::*;
use wp_perf_monitor::dashboard::Priority;
use wp_perf_monitor::health::classify_named;
use wp_perf_monitor::{Metric, MetricsSnapshot, StatusLevel};

#[test]
fn test_busy_page_cards() {
    let report = report_for(BUSY_PAGE, monitor(true));

    let status = |metric| report.card(metric).map(|c| c.status);
    assert_eq!(status(Metric::QueryCount), Some(StatusLevel::Warning));
    assert_eq!(status(Metric::MemoryUsage), Some(StatusLevel::Warning));
    assert_eq!(status(Metric::SlowQueries), Some(StatusLevel::Warning));
    assert_eq!(status(Metric::AutoloadSize), Some(StatusLevel::Warning));
    assert_eq!(status(Metric::ObjectCache), Some(StatusLevel::Neutral));

    assert_eq!(report.overall, StatusLevel::Warning);
    assert_eq!(report.health_score, 60);
}

#[test]
fn test_slow_queries_neutral_without_log() {
    let report = report_for(BUSY_PAGE, monitor(false));

    let card = report.card(Metric::SlowQueries).unwrap();
    assert_eq!(card.status, StatusLevel::Neutral);
    assert_eq!(card.value, "N/A");
    assert!(card.description.contains("SAVEQUERIES"));
    assert_eq!(report.health_score, 70);
}

#[test]
fn test_memory_card_progress() {
    let report = report_for(BUSY_PAGE, monitor(false));

    let card = report.card(Metric::MemoryUsage).unwrap();
    assert_eq!(card.value, "77.9%");
    assert!((card.progress.unwrap() - 77.858).abs() < 0.001);
    assert!(card.description.contains("256.0 MB"));
}

#[test]
fn test_critical_site() {
    let report = report_for(
        r#"{
            "num_queries": 320,
            "memory_peak_usage": 241172480,
            "memory_limit": "256m",
            "autoload_bytes": 1048576
        }"#,
        monitor(false),
    );

    assert_eq!(report.overall, StatusLevel::Critical);
    // query count, memory, autoload
    assert_eq!(report.health_score, 40);
    assert_eq!(report.recommendations[0].priority, Priority::Critical);
    assert_eq!(report.recommendations[0].metric, Metric::MemoryUsage);
}

#[test]
fn test_healthy_site() {
    let report = report_for(
        r#"{
            "num_queries": 24,
            "memory_peak_usage": 41943040,
            "memory_limit": "1G",
            "queries": [["SELECT 1", 0.001, "wp_head"]],
            "autoload_bytes": 102400,
            "object_cache": true
        }"#,
        monitor(true),
    );

    assert_eq!(report.overall, StatusLevel::Good);
    assert_eq!(report.health_score, 100);
    assert!(report.recommendations.is_empty());
    assert!(report
        .card(Metric::AutoloadSize)
        .unwrap()
        .description
        .starts_with("Excellent"));
}

#[test]
fn test_recommendations_keep_card_order() {
    let report = report_for(BUSY_PAGE, monitor(true));

    let metrics: Vec<Metric> = report.recommendations.iter().map(|r| r.metric).collect();
    assert_eq!(
        metrics,
        vec![
            Metric::QueryCount,
            Metric::MemoryUsage,
            Metric::SlowQueries,
            Metric::AutoloadSize,
            Metric::ObjectCache,
        ]
    );
    assert!(report
        .recommendations
        .iter()
        .all(|r| r.priority == Priority::Medium));
}

#[test]
fn test_environment_rows() {
    let report = report_for(BUSY_PAGE, monitor(false));

    let rows: Vec<(&str, &str)> = report
        .environment
        .iter()
        .map(|r| (r.label, r.value.as_str()))
        .collect();

    assert!(rows.contains(&("PHP Version", "8.2.12")));
    assert!(rows.contains(&("Memory Limit", "256.0 MB")));
    assert!(rows.contains(&("Object Cache", "Not active")));
}

#[test]
fn test_classify_by_name() {
    let snapshot = MetricsSnapshot::default().with_query_count(201);

    assert_eq!(
        classify_named("query_count", &snapshot).status,
        StatusLevel::Critical
    );

    let unknown = classify_named("page_weight", &snapshot);
    assert_eq!(unknown.status, StatusLevel::Neutral);
    assert!(unknown.title.is_empty());
    assert!(unknown.metric.is_none());
}

#[test]
fn test_reports_are_distinct() {
    let a = report_for(BUSY_PAGE, monitor(true));
    let b = report_for(BUSY_PAGE, monitor(true));

    assert_ne!(a.report_id, b.report_id);
    assert_eq!(a.cards, b.cards);
    assert_eq!(a.snapshot, b.snapshot);
}

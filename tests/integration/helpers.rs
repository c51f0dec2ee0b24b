//! Test helpers and utilities

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use wp_perf_monitor::{Dashboard, DashboardReport, HostReport, MonitorConfig};

/// Host export of a typical busy page: 150 queries, ~199MB of a 256M limit,
/// SAVEQUERIES log with two slow entries, ~600KB of autoloaded options.
pub const BUSY_PAGE: &str = r#"{
    "num_queries": 150,
    "memory_peak_usage": 209000000,
    "memory_limit": "256M",
    "queries": [
        ["SELECT option_value FROM wp_options WHERE option_name = 'siteurl'", 0.05, "get_option"],
        ["SELECT * FROM wp_posts WHERE post_type = 'product'", 0.15, "WP_Query->get_posts"],
        ["SELECT meta_value FROM wp_postmeta WHERE post_id IN (1,2,3)", 0.30, "update_meta_cache"],
        ["SELECT COUNT(*) FROM wp_comments", 0.08, "get_comment_count"]
    ],
    "autoload_bytes": 614400,
    "php_version": "8.2.12",
    "mysql_version": "8.0.35",
    "wp_version": "6.4.2",
    "object_cache": false
}"#;

/// Write a host export to a temporary file.
pub fn write_export(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write host export");
    file
}

/// Load a host export back from disk the way the binary does.
pub fn load_export(file: &NamedTempFile) -> HostReport {
    let reader = std::fs::File::open(file.path()).expect("Failed to open host export");
    HostReport::from_reader(reader).expect("Failed to parse host export")
}

/// Monitor config with the query log toggled and the default threshold.
pub fn monitor(query_log: bool) -> MonitorConfig {
    MonitorConfig::default().with_query_log(query_log)
}

/// Monitor config with a custom slow-query threshold.
pub fn monitor_with_threshold(threshold: Duration) -> MonitorConfig {
    MonitorConfig {
        query_log_enabled: true,
        slow_query_threshold: threshold,
    }
}

/// Build a report from raw export JSON.
pub fn report_for(json: &str, config: MonitorConfig) -> DashboardReport {
    let file = write_export(json);
    let host = load_export(&file);
    Dashboard::new(&host, config).report()
}

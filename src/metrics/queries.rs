//! Slow-query extraction from the host query log.

use super::snapshot::SlowQueryRecord;
use crate::host::QueryLogEntry;

/// Keep entries slower than `threshold_secs`, slowest first.
///
/// The sort is stable: queries with equal durations keep their log order.
pub fn extract_slow_queries(entries: Vec<QueryLogEntry>, threshold_secs: f64) -> Vec<SlowQueryRecord> {
    let mut slow: Vec<SlowQueryRecord> = entries
        .into_iter()
        .filter(|entry| entry.duration > threshold_secs)
        .map(|entry| SlowQueryRecord {
            sql: entry.sql,
            duration_seconds: entry.duration,
            caller: entry.caller,
        })
        .collect();

    slow.sort_by(|a, b| b.duration_seconds.total_cmp(&a.duration_seconds));
    slow
}

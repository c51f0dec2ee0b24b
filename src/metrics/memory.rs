//! Memory limit parsing.

use regex::Regex;
use std::sync::OnceLock;

/// PHP ini shorthand: digits followed by a single G/M/K unit.
static MEMORY_LIMIT_REGEX: OnceLock<Regex> = OnceLock::new();

fn memory_limit_regex() -> &'static Regex {
    MEMORY_LIMIT_REGEX.get_or_init(|| Regex::new(r"^(\d+)([GMKgmk])$").expect("Invalid regex"))
}

/// Parse a memory limit such as `"256M"` into bytes.
///
/// Returns 0 for anything that is not `<integer><G|M|K>`, including
/// `-1` (unlimited) and bare byte counts.
pub fn parse_memory_limit(limit: &str) -> u64 {
    let caps = match memory_limit_regex().captures(limit.trim()) {
        Some(caps) => caps,
        None => return 0,
    };

    let value: u64 = match caps[1].parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };

    let multiplier: u64 = match caps[2].to_ascii_uppercase().as_str() {
        "G" => 1024 * 1024 * 1024,
        "M" => 1024 * 1024,
        "K" => 1024,
        _ => return 0,
    };

    value.checked_mul(multiplier).unwrap_or(0)
}

/// Percentage of the limit in use; 0 when the limit is unknown.
pub fn memory_percent(used_bytes: u64, limit_bytes: u64) -> f64 {
    if limit_bytes == 0 {
        return 0.0;
    }
    used_bytes as f64 / limit_bytes as f64 * 100.0
}

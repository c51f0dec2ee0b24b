//! Collector configuration.

use std::time::Duration;

use super::parse::{env_bool, env_parse};
use super::ConfigError;

/// Default slow-query threshold (100ms).
pub const DEFAULT_SLOW_QUERY_THRESHOLD_MS: u64 = 100;

/// Settings that shape what the metrics collector reads from the host.
#[derive(Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Whether the host records a per-query log (WordPress `SAVEQUERIES`).
    pub query_log_enabled: bool,
    /// Queries slower than this are reported as slow.
    pub slow_query_threshold: Duration,
}

impl MonitorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let threshold_ms = env_parse("SLOW_QUERY_THRESHOLD_MS", DEFAULT_SLOW_QUERY_THRESHOLD_MS)?;
        if threshold_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "SLOW_QUERY_THRESHOLD_MS".into(),
                message: "must be greater than 0".into(),
            });
        }

        Ok(Self {
            query_log_enabled: env_bool("SAVEQUERIES", false),
            slow_query_threshold: Duration::from_millis(threshold_ms),
        })
    }

    /// Enable or disable the query log.
    pub fn with_query_log(mut self, enabled: bool) -> Self {
        self.query_log_enabled = enabled;
        self
    }

    /// Threshold in seconds, as compared against query-log durations.
    pub fn slow_query_threshold_secs(&self) -> f64 {
        self.slow_query_threshold.as_secs_f64()
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            query_log_enabled: false,
            slow_query_threshold: Duration::from_millis(DEFAULT_SLOW_QUERY_THRESHOLD_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert!(!config.query_log_enabled);
        assert_eq!(config.slow_query_threshold_secs(), 0.1);
        assert!(config.with_query_log(true).query_log_enabled);
    }
}

//! Logging configuration.

use super::parse::{env_opt, env_or};
use super::ConfigError;

/// Log line format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable `tracing_subscriber::fmt` output.
    Plain,
    /// One JSON object per line.
    Json,
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Service name for structured logging.
    pub service_name: String,
    /// Output format (LOG_FORMAT).
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// Priority: LOG_LEVEL > RUST_LOG > default
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: wp_perf_monitor=debug
    pub fn from_env() -> Result<Self, ConfigError> {
        let format = match env_opt("LOG_FORMAT").map(|v| v.to_lowercase()).as_deref() {
            None | Some("plain") | Some("text") => LogFormat::Plain,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT".into(),
                    message: format!("'{}', expected plain or json", other),
                })
            }
        };

        Ok(Self {
            filter: Self::resolve_log_filter(),
            service_name: env_or("SERVICE_NAME", "wp_perf_monitor"),
            format,
        })
    }

    fn resolve_log_filter() -> String {
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            let level = level.to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {
                    return format!("wp_perf_monitor={}", level);
                }
                _ => {
                    // Logging is not up yet
                    eprintln!(
                        "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                        level
                    );
                }
            }
        }

        if let Ok(filter) = std::env::var("RUST_LOG") {
            return filter;
        }

        "wp_perf_monitor=info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "wp_perf_monitor=info".to_string(),
            service_name: "wp_perf_monitor".to_string(),
            format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_log_level_priority() {
        env::remove_var("LOG_LEVEL");
        env::remove_var("RUST_LOG");

        assert_eq!(LoggingConfig::resolve_log_filter(), "wp_perf_monitor=info");

        env::set_var("RUST_LOG", "wp_perf_monitor=warn");
        assert_eq!(LoggingConfig::resolve_log_filter(), "wp_perf_monitor=warn");

        // LOG_LEVEL takes priority over RUST_LOG
        env::set_var("LOG_LEVEL", "DEBUG");
        assert_eq!(LoggingConfig::resolve_log_filter(), "wp_perf_monitor=debug");

        env::remove_var("LOG_LEVEL");
        env::remove_var("RUST_LOG");
    }
}

//! Configuration module for wp_perf_monitor.
//!
//! This module provides centralized configuration loading from environment variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use wp_perf_monitor::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Query log: {}", config.monitor.query_log_enabled);
//! ```

mod error;
mod logging;
mod monitor;
mod output;
mod parse;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use monitor::{MonitorConfig, DEFAULT_SLOW_QUERY_THRESHOLD_MS};
pub use output::{OutputConfig, OutputFormat};

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Collector configuration.
    pub monitor: MonitorConfig,
    /// Report output configuration.
    pub output: OutputConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            monitor: MonitorConfig::from_env()?,
            output: OutputConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        if self.monitor.query_log_enabled {
            info!(
                "  Query log: enabled (slow > {}ms)",
                self.monitor.slow_query_threshold.as_millis()
            );
        } else {
            info!("  Query log: disabled");
        }

        match self.output.host_report {
            Some(ref path) => info!("  Host report: {}", path.display()),
            None => info!("  Host report: stdin"),
        }

        info!("  Output: {:?}", self.output.format);
    }
}

//! Report output configuration.

use std::path::PathBuf;
use std::str::FromStr;

use super::parse::{env_opt, env_parse};
use super::ConfigError;

/// How the dashboard report is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Prometheus,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "prometheus" | "prom" => Ok(Self::Prometheus),
            other => Err(format!(
                "'{}', expected text, json or prometheus",
                other
            )),
        }
    }
}

/// Output configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct OutputConfig {
    /// Host export to read (HOST_REPORT). Stdin when unset.
    pub host_report: Option<PathBuf>,
    /// Output format (OUTPUT_FORMAT).
    pub format: OutputFormat,
    /// Slow queries listed by the text renderer (SLOW_QUERY_LIMIT).
    pub slow_query_limit: usize,
}

impl OutputConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let format = match env_opt("OUTPUT_FORMAT") {
            Some(v) => v.parse().map_err(|message| ConfigError::Invalid {
                key: "OUTPUT_FORMAT".into(),
                message,
            })?,
            None => OutputFormat::Text,
        };

        Ok(Self {
            host_report: env_opt("HOST_REPORT").map(PathBuf::from),
            format,
            slow_query_limit: env_parse("SLOW_QUERY_LIMIT", 10)?,
        })
    }
}

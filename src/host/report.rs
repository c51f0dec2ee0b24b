//! Host counters loaded from a JSON export.
//!
//! The export mirrors what a WordPress request knows about itself:
//!
//! ```json
//! {
//!   "num_queries": 42,
//!   "memory_peak_usage": 41943040,
//!   "memory_limit": "256M",
//!   "queries": [["SELECT option_value FROM wp_options", 0.0021, "require_once, get_option"]],
//!   "options": [{"name": "siteurl", "value": "https://example.org", "autoload": "yes"}],
//!   "php_version": "8.2.12",
//!   "mysql_version": "8.0.35",
//!   "wp_version": "6.4.2",
//!   "object_cache": false
//! }
//! ```
//!
//! Missing fields are reported to the collector as unavailable. A field
//! with the wrong shape is logged and treated as missing, and a malformed
//! query-log entry or option row is skipped, so one bad value never costs
//! the rest of the export.

use std::fmt;
use std::io::Read;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use super::{Host, HostError, QueryLogEntry};

/// A row of the options table.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredOption {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub autoload: AutoloadFlag,
}

/// Autoload column value: a boolean or one of WordPress's string flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AutoloadFlag {
    Bool(bool),
    Text(String),
}

impl AutoloadFlag {
    /// `yes`, `on`, `auto` and `auto-on` load on every request.
    pub fn is_enabled(&self) -> bool {
        match self {
            AutoloadFlag::Bool(b) => *b,
            AutoloadFlag::Text(s) => {
                let s = s.trim();
                ["yes", "on", "auto", "auto-on"]
                    .iter()
                    .any(|flag| s.eq_ignore_ascii_case(flag))
            }
        }
    }
}

impl Default for AutoloadFlag {
    fn default() -> Self {
        AutoloadFlag::Bool(false)
    }
}

/// Counters exported by the host for one request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostReport {
    #[serde(deserialize_with = "lenient::count")]
    pub num_queries: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub memory_peak_usage: Option<u64>,
    #[serde(deserialize_with = "lenient::text")]
    pub memory_limit: Option<String>,
    #[serde(deserialize_with = "lenient::rows")]
    pub queries: Option<Vec<QueryLogEntry>>,
    #[serde(deserialize_with = "lenient::rows")]
    pub options: Option<Vec<StoredOption>>,
    /// Precomputed autoload aggregate. Takes precedence over `options`.
    #[serde(deserialize_with = "lenient::count")]
    pub autoload_bytes: Option<u64>,
    #[serde(deserialize_with = "lenient::version")]
    pub php_version: String,
    #[serde(deserialize_with = "lenient::version")]
    pub mysql_version: String,
    #[serde(deserialize_with = "lenient::version")]
    pub wp_version: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub object_cache: bool,
}

impl HostReport {
    /// Parse an export from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Parse an export from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl Host for HostReport {
    fn query_count(&self) -> Result<u64, HostError> {
        self.num_queries.ok_or(HostError::Unavailable {
            what: "query count",
        })
    }

    fn memory_peak_usage(&self) -> Result<u64, HostError> {
        self.memory_peak_usage.ok_or(HostError::Unavailable {
            what: "peak memory usage",
        })
    }

    fn memory_limit(&self) -> Result<String, HostError> {
        self.memory_limit.clone().ok_or(HostError::Unavailable {
            what: "memory limit",
        })
    }

    fn query_log(&self) -> Result<Vec<QueryLogEntry>, HostError> {
        self.queries.clone().ok_or(HostError::Unavailable {
            what: "query log",
        })
    }

    fn autoload_size(&self) -> Result<Option<u64>, HostError> {
        if let Some(bytes) = self.autoload_bytes {
            return Ok(Some(bytes));
        }

        let options = self.options.as_ref().ok_or(HostError::Unavailable {
            what: "options table",
        })?;

        // SUM() over no rows is NULL
        let mut autoloaded = options.iter().filter(|o| o.autoload.is_enabled()).peekable();
        if autoloaded.peek().is_none() {
            return Ok(None);
        }
        Ok(Some(autoloaded.map(|o| o.value.len() as u64).sum()))
    }

    fn php_version(&self) -> String {
        self.php_version.clone()
    }

    fn mysql_version(&self) -> String {
        self.mysql_version.clone()
    }

    fn wp_version(&self) -> String {
        self.wp_version.clone()
    }

    fn object_cache_active(&self) -> bool {
        self.object_cache
    }
}

impl<'de> Deserialize<'de> for QueryLogEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QueryLogEntryVisitor)
    }
}

/// Accepts `[sql, elapsed, caller, ...]` (WordPress `$wpdb->queries`) or an
/// object with `sql`, `duration` and `caller` keys.
struct QueryLogEntryVisitor;

impl<'de> Visitor<'de> for QueryLogEntryVisitor {
    type Value = QueryLogEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a [sql, elapsed, caller] array or a {sql, duration, caller} object")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let sql: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let duration: f64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let caller: String = seq.next_element()?.unwrap_or_default();

        // Newer WordPress appends start time and custom data
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(QueryLogEntry {
            sql,
            duration,
            caller,
        })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut sql: Option<String> = None;
        let mut duration: Option<f64> = None;
        let mut caller: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "sql" => sql = Some(map.next_value()?),
                "duration" | "elapsed" => duration = Some(map.next_value()?),
                "caller" => caller = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(QueryLogEntry {
            sql: sql.ok_or_else(|| de::Error::missing_field("sql"))?,
            duration: duration.ok_or_else(|| de::Error::missing_field("duration"))?,
            caller: caller.unwrap_or_default(),
        })
    }
}

/// Field deserializers that log and drop values of the wrong shape.
///
/// PHP exporters often write numbers as strings (`"42"`), so those are
/// accepted wherever a count is expected.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use tracing::warn;

    pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let count = match &value {
            Value::Null => return Ok(None),
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        if count.is_none() {
            warn!(value = %value, "Ignoring non-numeric counter in host export");
        }
        Ok(count)
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            other => {
                warn!(value = %other, "Ignoring non-text value in host export");
                None
            }
        })
    }

    pub fn version<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        text(deserializer).map(Option::unwrap_or_default)
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ),
            _ => false,
        })
    }

    /// A list whose malformed rows are skipped one by one.
    pub fn rows<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let items = match Value::deserialize(deserializer)? {
            Value::Null => return Ok(None),
            Value::Array(items) => items,
            other => {
                warn!(value = %other, "Ignoring non-list value in host export");
                return Ok(None);
            }
        };

        let rows = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed row in host export");
                    None
                }
            })
            .collect();
        Ok(Some(rows))
    }
}

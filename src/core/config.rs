//! String-keyed sink configuration

use super::error::{LoggerError, Result};
use super::severity::Threshold;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Recognised configuration keys.
pub mod keys {
    /// Selects the sink variant: `""`, `"std"`, `"file"`, `"xml"`.
    pub const TYPE: &str = "type";
    /// Output path for file and xml sinks (required).
    pub const FILENAME: &str = "filename";
    /// Seconds between forced close/reopen cycles of a file sink.
    pub const REOPEN_INTERVAL: &str = "reopen_interval";
    /// Presence enables ANSI colors on the std sink.
    pub const COLOR: &str = "color";
    /// Presence routes FATAL/ERROR lines of the std sink to stderr.
    pub const STDERR: &str = "stderr";
    /// Overrides the built-in minimum severity of any sink.
    pub const THRESHOLD: &str = "threshold";
}

/// Configuration map consumed once when a sink is built.
///
/// # Examples
///
/// ```
/// use rust_sink_logger::SinkConfiguration;
///
/// let config = SinkConfiguration::from([("type", "file"), ("filename", "/tmp/app.log")]);
/// assert_eq!(config.get("type"), Some("file"));
/// assert!(!config.contains("color"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SinkConfiguration {
    entries: HashMap<String, String>,
}

impl SinkConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of string values.
    ///
    /// ```
    /// use rust_sink_logger::SinkConfiguration;
    ///
    /// let config = SinkConfiguration::from_json(r#"{"type": "std", "stderr": ""}"#).unwrap();
    /// assert!(config.contains("stderr"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value of a mandatory key.
    pub fn require(&self, component: &str, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| LoggerError::missing_key(component, key))
    }

    /// Value of the `threshold` key, or the built-in default when absent.
    pub fn threshold(&self) -> Result<Threshold> {
        match self.get(keys::THRESHOLD) {
            Some(value) => value.parse(),
            None => Ok(Threshold::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SinkConfiguration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for SinkConfiguration {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for SinkConfiguration {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

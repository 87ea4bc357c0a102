//! Sink registry and factory
//!
//! Maps the configuration `type` value to a constructor. The built-in table is
//! `""` (null), `"std"`, `"file"` and `"xml"`; applications may register their
//! own types at startup or later. Lookups take the shared guard, registration
//! the exclusive one.

use crate::core::{keys, LoggerError, Result, Sink, SinkConfiguration};
use crate::sinks::{FileSink, NullSink, StdSink, XmlSink};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Builds a sink from the full configuration map.
pub type SinkConstructor =
    Arc<dyn Fn(&SinkConfiguration) -> Result<Box<dyn Sink>> + Send + Sync>;

static GLOBAL_REGISTRY: Lazy<SinkRegistry> = Lazy::new(SinkRegistry::new);

pub struct SinkRegistry {
    constructors: RwLock<HashMap<String, SinkConstructor>>,
}

impl SinkRegistry {
    /// Registry holding the four built-in sink types.
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.register(NullSink::TYPE, |config| {
            Ok(Box::new(NullSink::from_config(config)))
        });
        registry.register(StdSink::TYPE, |config| {
            Ok(Box::new(StdSink::from_config(config)?))
        });
        registry.register(FileSink::TYPE, |config| {
            Ok(Box::new(FileSink::from_config(config)?))
        });
        registry.register(XmlSink::TYPE, |config| {
            Ok(Box::new(XmlSink::from_config(config)?))
        });
        registry
    }

    /// Registry without any entries.
    pub fn empty() -> Self {
        Self {
            constructors: RwLock::new(HashMap::new()),
        }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static SinkRegistry {
        &GLOBAL_REGISTRY
    }

    /// Register `constructor` for `sink_type`, returning the one it replaces.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_sink_logger::prelude::*;
    ///
    /// let registry = SinkRegistry::new();
    /// registry.register("quiet", |_config| Ok(Box::new(NullSink::new())));
    ///
    /// let sink = registry.produce(&SinkConfiguration::from([("type", "quiet")])).unwrap();
    /// assert_eq!(sink.name(), "null");
    /// ```
    pub fn register<F>(&self, sink_type: impl Into<String>, constructor: F) -> Option<SinkConstructor>
    where
        F: Fn(&SinkConfiguration) -> Result<Box<dyn Sink>> + Send + Sync + 'static,
    {
        self.constructors
            .write()
            .insert(sink_type.into(), Arc::new(constructor))
    }

    pub fn contains(&self, sink_type: &str) -> bool {
        self.constructors.read().contains_key(sink_type)
    }

    /// Registered type names, sorted.
    pub fn types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.constructors.read().keys().cloned().collect();
        types.sort();
        types
    }

    /// Build the sink selected by `config["type"]`.
    ///
    /// # Errors
    ///
    /// Fails when `type` is missing or unknown, or when the selected
    /// constructor rejects the rest of the configuration.
    pub fn produce(&self, config: &SinkConfiguration) -> Result<Box<dyn Sink>> {
        let sink_type = config
            .get(keys::TYPE)
            .ok_or_else(|| LoggerError::missing_key("sink registry", keys::TYPE))?;

        // Clone the constructor out so the guard is released before it runs.
        let constructor = self
            .constructors
            .read()
            .get(sink_type)
            .cloned()
            .ok_or_else(|| LoggerError::unknown_sink_type(sink_type))?;

        constructor(config)
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a sink through the process-wide registry.
pub fn produce(config: &SinkConfiguration) -> Result<Box<dyn Sink>> {
    SinkRegistry::global().produce(config)
}

//! Sink that discards everything

use crate::core::{LogRecord, Severity, Sink, SinkConfiguration, SinkMetrics, SourceLocation, Threshold};

/// Selected by the empty type string: logging is compiled in but goes nowhere.
#[derive(Debug, Default)]
pub struct NullSink {
    metrics: SinkMetrics,
}

impl NullSink {
    pub const TYPE: &'static str = "";

    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any configuration.
    pub fn from_config(_config: &SinkConfiguration) -> Self {
        Self::new()
    }
}

impl Sink for NullSink {
    fn name(&self) -> &str {
        "null"
    }

    fn threshold(&self) -> Threshold {
        Threshold::Off
    }

    fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    fn render(&self, _record: &LogRecord<'_>) -> String {
        String::new()
    }

    fn log_line(&self, _line: &str) {}

    fn log(&self, _message: &str, _severity: Severity, _location: &SourceLocation<'_>) {}
}

//! Plain-text file sink

use super::file_writer::FileWriter;
use crate::core::{LineFormat, LogRecord, Result, Sink, SinkConfiguration, SinkMetrics, Threshold};
use std::path::PathBuf;
use std::time::Duration;

/// Appends plain lines to a file that is reopened every `reopen_interval`.
///
/// # Examples
///
/// ```no_run
/// use rust_sink_logger::prelude::*;
/// use std::time::Duration;
///
/// let sink = FileSink::new("/var/log/app.log", Duration::from_secs(60));
/// sink.log("started", Severity::Info, &location!());
/// ```
#[derive(Debug)]
pub struct FileSink {
    writer: FileWriter,
    threshold: Threshold,
}

impl FileSink {
    pub const TYPE: &'static str = "file";

    pub fn new(path: impl Into<PathBuf>, reopen_interval: Duration) -> Self {
        Self {
            writer: FileWriter::new(path, reopen_interval),
            threshold: Threshold::default(),
        }
    }

    /// Build from the `filename`, `reopen_interval` and `threshold` keys.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a missing `filename` or a
    /// malformed `reopen_interval` or `threshold`. The file is not touched
    /// in that case.
    pub fn from_config(config: &SinkConfiguration) -> Result<Self> {
        let threshold = config.threshold()?;
        Ok(Self {
            writer: FileWriter::from_config("file sink", config)?,
            threshold,
        })
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.threshold = threshold.into();
        self
    }

    /// Close and reopen the file if the interval has elapsed.
    pub fn reopen(&self) -> bool {
        self.writer.reopen()
    }

    pub fn writer(&self) -> &FileWriter {
        &self.writer
    }
}

impl Sink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn threshold(&self) -> Threshold {
        self.threshold
    }

    fn metrics(&self) -> &SinkMetrics {
        self.writer.metrics()
    }

    fn render(&self, record: &LogRecord<'_>) -> String {
        LineFormat::Plain.format(record)
    }

    fn log_line(&self, line: &str) {
        self.writer.write(line);
    }
}

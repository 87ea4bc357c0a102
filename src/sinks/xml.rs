//! XML file sink

use super::file_writer::FileWriter;
use crate::core::{LineFormat, LogRecord, Result, Sink, SinkConfiguration, SinkMetrics, Threshold};
use std::path::PathBuf;
use std::time::Duration;

/// Writes one `<entry>` element per line through the same reopening
/// file plumbing as [`FileSink`](super::FileSink).
///
/// Message text is not escaped.
#[derive(Debug)]
pub struct XmlSink {
    writer: FileWriter,
    threshold: Threshold,
}

impl XmlSink {
    pub const TYPE: &'static str = "xml";

    pub fn new(path: impl Into<PathBuf>, reopen_interval: Duration) -> Self {
        Self {
            writer: FileWriter::new(path, reopen_interval),
            threshold: Threshold::default(),
        }
    }

    pub fn from_config(config: &SinkConfiguration) -> Result<Self> {
        let threshold = config.threshold()?;
        Ok(Self {
            writer: FileWriter::from_config("xml sink", config)?,
            threshold,
        })
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.threshold = threshold.into();
        self
    }

    pub fn reopen(&self) -> bool {
        self.writer.reopen()
    }

    pub fn writer(&self) -> &FileWriter {
        &self.writer
    }
}

impl Sink for XmlSink {
    fn name(&self) -> &str {
        "xml"
    }

    fn threshold(&self) -> Threshold {
        self.threshold
    }

    fn metrics(&self) -> &SinkMetrics {
        self.writer.metrics()
    }

    fn render(&self, record: &LogRecord<'_>) -> String {
        LineFormat::Xml.format(record)
    }

    fn log_line(&self, line: &str) {
        self.writer.write(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LoggerError, Severity, SourceLocation};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_xml_sink_writes_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.xml");
        let sink = XmlSink::new(&path, Duration::from_secs(300)).with_threshold(Severity::Verbose);

        let location = SourceLocation::new("src/cache.rs", 88, "cache::evict");
        sink.log("evicted 3 keys", Severity::Debug, &location);
        sink.log("bare", Severity::Fatal, &SourceLocation::unsupported());

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        assert!(lines[0].starts_with("<entry><timestamp>"));
        assert!(lines[0].ends_with(
            "</timestamp><filename>src/cache.rs</filename><line>88</line>\
             <function>cache::evict</function><severity>DEBUG</severity>\
             <message>evicted 3 keys</message></entry>"
        ));
        assert!(lines[1].ends_with(
            "</timestamp><severity>FATAL</severity><message>bare</message></entry>"
        ));
    }

    #[test]
    fn test_xml_from_config_requires_filename() {
        let config = SinkConfiguration::from([("type", "xml"), ("reopen_interval", "1")]);
        let err = XmlSink::from_config(&config).unwrap_err();
        assert!(matches!(err, LoggerError::MissingKey { .. }));
    }

    #[test]
    fn test_xml_from_config_rejects_bad_interval() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.xml");
        let config = SinkConfiguration::from([
            ("type", "xml"),
            ("filename", path.to_str().unwrap()),
            ("reopen_interval", "five"),
        ]);
        let err = XmlSink::from_config(&config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidReopenInterval { .. }));
        assert!(!path.exists());
    }
}

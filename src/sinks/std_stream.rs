//! Standard-stream sink

use crate::core::{
    keys, LineFormat, LogRecord, Result, Sink, SinkConfiguration, SinkMetrics, Threshold,
};
use std::io::Write;

/// Which process stream a line goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Writes lines to stdout, optionally colored and with errors split to stderr.
///
/// Both options are switched on by the mere presence of the `color` and
/// `stderr` configuration keys.
///
/// # Example
///
/// ```
/// use rust_sink_logger::prelude::*;
///
/// let sink = StdSink::new().with_colors(true).with_stderr(true);
/// sink.log("service ready", Severity::Info, &location!());
/// ```
#[derive(Debug)]
pub struct StdSink {
    use_color: bool,
    route_errors_to_stderr: bool,
    threshold: Threshold,
    metrics: SinkMetrics,
}

impl StdSink {
    pub const TYPE: &'static str = "std";

    pub fn new() -> Self {
        Self {
            use_color: false,
            route_errors_to_stderr: false,
            threshold: Threshold::default(),
            metrics: SinkMetrics::new(),
        }
    }

    /// Build from the `color`, `stderr` and `threshold` keys.
    pub fn from_config(config: &SinkConfiguration) -> Result<Self> {
        Ok(Self::new()
            .with_colors(config.contains(keys::COLOR))
            .with_stderr(config.contains(keys::STDERR))
            .with_threshold(config.threshold()?))
    }

    #[must_use]
    pub fn with_colors(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    #[must_use]
    pub fn with_stderr(mut self, route_errors_to_stderr: bool) -> Self {
        self.route_errors_to_stderr = route_errors_to_stderr;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.threshold = threshold.into();
        self
    }

    pub fn uses_color(&self) -> bool {
        self.use_color
    }

    pub fn routes_errors_to_stderr(&self) -> bool {
        self.route_errors_to_stderr
    }

    /// Pick the stream for a rendered line.
    ///
    /// Matches on the rendered tag, so a message that itself contains
    /// `[ERROR]` is routed to stderr as well.
    pub fn route(&self, line: &str) -> Stream {
        if self.route_errors_to_stderr && (line.contains("[FATAL]") || line.contains("[ERROR]")) {
            Stream::Stderr
        } else {
            Stream::Stdout
        }
    }

    fn line_format(&self) -> LineFormat {
        if self.use_color {
            LineFormat::Colored
        } else {
            LineFormat::Plain
        }
    }
}

impl Default for StdSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdSink {
    fn name(&self) -> &str {
        "std"
    }

    fn threshold(&self) -> Threshold {
        self.threshold
    }

    fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    fn render(&self, record: &LogRecord<'_>) -> String {
        self.line_format().format(record)
    }

    fn log_line(&self, line: &str) {
        // One write_all per line on the locked stream keeps lines from
        // different threads from interleaving.
        let result = match self.route(line) {
            Stream::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(line.as_bytes()).and_then(|()| out.flush())
            }
            Stream::Stderr => {
                let mut err = std::io::stderr().lock();
                err.write_all(line.as_bytes()).and_then(|()| err.flush())
            }
        };

        if result.is_ok() {
            self.metrics.record_written();
        } else {
            self.metrics.record_write_failure();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Severity, SourceLocation};

    #[test]
    fn test_key_presence_enables_features() {
        let config = SinkConfiguration::from([("type", "std"), ("color", ""), ("stderr", "no")]);
        let sink = StdSink::from_config(&config).unwrap();
        assert!(sink.uses_color());
        assert!(sink.routes_errors_to_stderr());

        let sink = StdSink::from_config(&SinkConfiguration::from([("type", "std")])).unwrap();
        assert!(!sink.uses_color());
        assert!(!sink.routes_errors_to_stderr());
    }

    #[test]
    fn test_routing() {
        let location = SourceLocation::unsupported();
        let sink = StdSink::new().with_stderr(true);

        for severity in Severity::ALL {
            let line = sink.render(&LogRecord::new("msg", severity, &location));
            let expected = match severity {
                Severity::Error | Severity::Fatal => Stream::Stderr,
                _ => Stream::Stdout,
            };
            assert_eq!(sink.route(&line), expected, "{severity}");
        }

        let plain = StdSink::new();
        let line = plain.render(&LogRecord::new("msg", Severity::Fatal, &location));
        assert_eq!(plain.route(&line), Stream::Stdout);
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_routing_survives_color() {
        let location = SourceLocation::unsupported();
        let sink = StdSink::new().with_colors(true).with_stderr(true);
        let line = sink.render(&LogRecord::new("msg", Severity::Error, &location));
        assert!(line.contains("\x1b["));
        assert_eq!(sink.route(&line), Stream::Stderr);
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_color_key_paints_tag_without_terminal() {
        // Test output is captured, so stdout is not a terminal here.
        let config = SinkConfiguration::from([("type", "std"), ("color", "")]);
        let sink = StdSink::from_config(&config).unwrap();
        assert!(sink.uses_color());

        let location = SourceLocation::unsupported();
        let line = sink.render(&LogRecord::new("msg", Severity::Info, &location));
        assert!(line.contains("\x1b[1;32m[INFO]\x1b[0m"), "{line:?}");

        let line = sink.render(&LogRecord::new("msg", Severity::Fatal, &location));
        assert!(line.contains("\x1b[1;41m[FATAL]\x1b[0m"), "{line:?}");
    }

    #[test]
    fn test_render_truncates_file_name() {
        let location = SourceLocation::new("/home/dev/project/src/main.rs", 9, "main");
        let sink = StdSink::new();
        let line = sink.render(&LogRecord::new("hello", Severity::Info, &location));
        assert!(line.ends_with(" [INFO] main.rs:9 main hello\n"));
    }

    #[test]
    fn test_threshold_filters_before_output() {
        let sink = StdSink::new().with_threshold(Severity::Error);
        let location = SourceLocation::unsupported();
        sink.log("hidden", Severity::Info, &location);
        sink.log("hidden", Severity::Warning, &location);
        assert_eq!(sink.metrics().filtered(), 2);
        assert_eq!(sink.metrics().lines_written(), 0);
    }

    #[test]
    fn test_invalid_threshold_is_config_error() {
        let config = SinkConfiguration::from([("type", "std"), ("threshold", "chatty")]);
        assert!(StdSink::from_config(&config).is_err());
    }
}

//! Sink trait for log destinations

use super::{
    location::SourceLocation, metrics::SinkMetrics, record::LogRecord, severity::Severity,
    severity::Threshold,
};
use std::fmt;
use std::sync::Arc;

/// A destination that renders and persists log lines.
///
/// Implementations are shared between threads and must never panic or
/// return errors from the logging methods.
pub trait Sink: Send + Sync {
    fn name(&self) -> &str;

    fn threshold(&self) -> Threshold;

    fn metrics(&self) -> &SinkMetrics;

    /// Render one newline-terminated line for `record`.
    fn render(&self, record: &LogRecord<'_>) -> String;

    /// Write an already formatted line verbatim.
    fn log_line(&self, line: &str);

    #[inline]
    fn should_log(&self, severity: Severity) -> bool {
        self.threshold().allows(severity)
    }

    /// Gate on the threshold, then render and write one line.
    fn log(&self, message: &str, severity: Severity, location: &SourceLocation<'_>) {
        if !self.should_log(severity) {
            self.metrics().record_filtered();
            return;
        }

        let record = LogRecord::new(message, severity, location);
        let line = self.render(&record);
        self.log_line(&line);
    }

    /// Like [`log`](Sink::log), but the message is only formatted once the
    /// severity has passed the threshold.
    fn log_args(&self, severity: Severity, location: &SourceLocation<'_>, args: fmt::Arguments<'_>) {
        if !self.should_log(severity) {
            self.metrics().record_filtered();
            return;
        }

        match args.as_str() {
            Some(message) => self.log(message, severity, location),
            None => self.log(&args.to_string(), severity, location),
        }
    }
}

macro_rules! forward_sink {
    ($ty:ty) => {
        impl<S: Sink + ?Sized> Sink for $ty {
            fn name(&self) -> &str {
                (**self).name()
            }

            fn threshold(&self) -> Threshold {
                (**self).threshold()
            }

            fn metrics(&self) -> &SinkMetrics {
                (**self).metrics()
            }

            fn render(&self, record: &LogRecord<'_>) -> String {
                (**self).render(record)
            }

            fn log_line(&self, line: &str) {
                (**self).log_line(line)
            }

            fn should_log(&self, severity: Severity) -> bool {
                (**self).should_log(severity)
            }

            fn log(&self, message: &str, severity: Severity, location: &SourceLocation<'_>) {
                (**self).log(message, severity, location)
            }

            fn log_args(&self, severity: Severity, location: &SourceLocation<'_>, args: fmt::Arguments<'_>) {
                (**self).log_args(severity, location, args)
            }
        }
    };
}

forward_sink!(Box<S>);
forward_sink!(Arc<S>);
forward_sink!(&S);

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        lines: parking_lot::Mutex<Vec<String>>,
        threshold: Threshold,
        metrics: SinkMetrics,
    }

    impl Recorder {
        fn new(threshold: Severity) -> Self {
            Self {
                lines: parking_lot::Mutex::new(Vec::new()),
                threshold: threshold.into(),
                metrics: SinkMetrics::new(),
            }
        }
    }

    impl Sink for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn threshold(&self) -> Threshold {
            self.threshold
        }

        fn metrics(&self) -> &SinkMetrics {
            &self.metrics
        }

        fn render(&self, record: &LogRecord<'_>) -> String {
            format!("{} {}\n", record.severity, record.message)
        }

        fn log_line(&self, line: &str) {
            self.lines.lock().push(line.to_string());
        }
    }

    struct Loud;

    impl fmt::Display for Loud {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            panic!("formatted a filtered message");
        }
    }

    #[test]
    fn test_log_gates_then_renders() {
        let sink = Recorder::new(Severity::Warning);
        let location = SourceLocation::unsupported();
        for severity in Severity::ALL {
            sink.log("m", severity, &location);
        }
        assert_eq!(*sink.lines.lock(), vec!["WARNING m\n", "ERROR m\n", "FATAL m\n"]);
        assert_eq!(sink.metrics().filtered(), 3);
    }

    #[test]
    fn test_log_accepts_runtime_location() {
        let sink = Recorder::new(Severity::Verbose);
        let file = String::from("generated/script.lua");
        let location = SourceLocation::new(&file, 3, "main");
        sink.log("from script", Severity::Info, &location);
        assert_eq!(*sink.lines.lock(), vec!["INFO from script\n"]);
    }

    #[test]
    fn test_log_args_skips_formatting_when_filtered() {
        let sink = Recorder::new(Severity::Error);
        let location = SourceLocation::unsupported();
        sink.log_args(Severity::Debug, &location, format_args!("{}", Loud));
        sink.log_args(Severity::Error, &location, format_args!("code {}", 7));
        assert_eq!(*sink.lines.lock(), vec!["ERROR code 7\n"]);
    }

    #[test]
    fn test_boxed_and_shared_sinks_forward() {
        let boxed: Box<dyn Sink> = Box::new(Recorder::new(Severity::Info));
        assert_eq!(boxed.name(), "recorder");
        assert!(!boxed.should_log(Severity::Debug));

        let recorder = Arc::new(Recorder::new(Severity::Verbose));
        let shared: Arc<dyn Sink> = recorder.clone();
        let by_ref = &shared;
        by_ref.log("x", Severity::Verbose, &SourceLocation::unsupported());
        assert_eq!(*recorder.lines.lock(), vec!["VERBOSE x\n"]);
    }
}

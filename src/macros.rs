//! Call-site logging macros.
//!
//! Every macro captures `file!()`, `line!()` and the enclosing function's
//! path, checks the threshold, and only then formats its arguments. Without
//! a `to:` target they log through the process-wide sink.
//!
//! # Examples
//!
//! ```
//! use rust_sink_logger::{info, warning};
//! use rust_sink_logger::prelude::*;
//!
//! let port = 8080;
//! info!("listening on port {}", port);
//!
//! let sink = NullSink::new();
//! warning!(to: sink, "disk at {}%", 91);
//! ```

/// Path of the enclosing function, e.g. `my_crate::server::run`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            Some(enclosing) => enclosing,
            None => name,
        }
    }};
}

/// [`SourceLocation`](crate::SourceLocation) of the call site.
#[macro_export]
macro_rules! location {
    () => {
        $crate::SourceLocation::new(
            ::std::file!(),
            ::std::line!(),
            $crate::function_name!(),
        )
    };
}

/// Log at an explicit severity.
///
/// ```
/// use rust_sink_logger::log;
/// use rust_sink_logger::prelude::*;
///
/// let sink = NullSink::new();
/// log!(to: sink, Severity::Error, "request {} failed", 17);
/// log!(Severity::Info, "plain message");
/// ```
#[macro_export]
macro_rules! log {
    (to: $sink:expr, $severity:expr, $($arg:tt)+) => {
        $crate::Sink::log_args(
            &$sink,
            $severity,
            &$crate::location!(),
            ::std::format_args!($($arg)+),
        )
    };
    ($severity:expr, $($arg:tt)+) => {
        $crate::global::log_args(
            $severity,
            &$crate::location!(),
            ::std::format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! verbose {
    (to: $sink:expr, $($arg:tt)+) => {
        $crate::log!(to: $sink, $crate::Severity::Verbose, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Verbose, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    (to: $sink:expr, $($arg:tt)+) => {
        $crate::log!(to: $sink, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    (to: $sink:expr, $($arg:tt)+) => {
        $crate::log!(to: $sink, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    (to: $sink:expr, $($arg:tt)+) => {
        $crate::log!(to: $sink, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    (to: $sink:expr, $($arg:tt)+) => {
        $crate::log!(to: $sink, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Error, $($arg)+)
    };
}

/// Logs at fatal severity. Does not abort the process.
#[macro_export]
macro_rules! fatal {
    (to: $sink:expr, $($arg:tt)+) => {
        $crate::log!(to: $sink, $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Severity, Sink};
    use crate::sinks::FileSink;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn verbose_sink(path: &std::path::Path) -> FileSink {
        FileSink::new(path, Duration::from_secs(300)).with_threshold(Severity::Verbose)
    }

    #[test]
    fn test_function_name_is_enclosing_path() {
        let name = function_name!();
        assert_eq!(
            name,
            "rust_sink_logger::macros::tests::test_function_name_is_enclosing_path"
        );
    }

    #[test]
    fn test_severity_macros_write_tags_and_location() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("macros.log");
        let sink = verbose_sink(&path);

        verbose!(to: sink, "v {}", 1);
        debug!(to: sink, "d {}", 2);
        info!(to: sink, "i {}", 3);
        warning!(to: sink, "w {}", 4);
        error!(to: sink, "e {}", 5);
        fatal!(to: sink, "f {}", 6);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        for (line, (severity, message)) in lines.iter().zip(
            Severity::ALL
                .iter()
                .zip(["v 1", "d 2", "i 3", "w 4", "e 5", "f 6"]),
        ) {
            assert!(line.contains(&format!(" [{}] macros.rs:", severity.as_str())));
            assert!(line.contains("test_severity_macros_write_tags_and_location"));
            assert!(line.ends_with(message));
        }
    }

    #[test]
    fn test_log_macro_with_explicit_severity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("explicit.log");
        let sink = verbose_sink(&path);

        let severity = Severity::Warning;
        crate::log!(to: sink, severity, "literal only");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(" [WARNING] "));
        assert!(content.ends_with(" literal only\n"));
    }

    #[test]
    fn test_filtered_macro_does_not_evaluate_formatting() {
        struct Explodes;
        impl std::fmt::Display for Explodes {
            fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted below threshold");
            }
        }

        let dir = tempdir().unwrap();
        let path = dir.path().join("filtered.log");
        let sink = FileSink::new(&path, Duration::from_secs(300)).with_threshold(Severity::Error);

        debug!(to: sink, "{}", Explodes);
        assert_eq!(sink.metrics().filtered(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_macros_accept_boxed_sinks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("boxed.log");
        let sink: Box<dyn Sink> = Box::new(verbose_sink(&path));

        info!(to: sink, "through a box");
        assert!(fs::read_to_string(&path)
            .unwrap()
            .ends_with(" through a box\n"));
    }
}

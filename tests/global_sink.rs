//! Process-wide sink tests
//!
//! The active sink can be installed only once per process, so everything
//! touching it runs inside a single test.

use rust_sink_logger::prelude::*;
use rust_sink_logger::{debug, error, fatal, info, verbose, warning};
use std::fs;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 4;
const MESSAGES_PER_THREAD: usize = 250;

#[test]
fn test_global_configure_and_macros() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("global.log");

    assert!(!rust_sink_logger::is_configured());

    // A rejected configuration installs nothing.
    let err = configure(&SinkConfiguration::from([("type", "file")])).unwrap_err();
    assert!(err.is_configuration_error());
    assert!(!rust_sink_logger::is_configured());

    let config = SinkConfiguration::from([
        ("type", "file"),
        ("filename", log_file.to_str().expect("utf-8 temp path")),
        ("threshold", "debug"),
    ]);
    configure(&config).expect("first configure succeeds");
    assert!(rust_sink_logger::is_configured());
    assert_eq!(rust_sink_logger::sink().name(), "file");

    let again = configure(&SinkConfiguration::from([("type", "std")])).unwrap_err();
    assert!(matches!(again, LoggerError::AlreadyConfigured));
    assert_eq!(rust_sink_logger::sink().name(), "file");

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    verbose!("thread {} message {}", thread_id, i);
                    debug!("thread {} message {}", thread_id, i);
                    info!("thread {} message {}", thread_id, i);
                    warning!("thread {} message {}", thread_id, i);
                    error!("thread {} message {}", thread_id, i);
                    fatal!("thread {} message {}", thread_id, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    rust_sink_logger::global::log("direct call", Severity::Info, &location!());
    rust_sink_logger::global::log_line("raw line\n");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();

    // Verbose is filtered; the other five levels pass.
    assert_eq!(lines.len(), THREADS * MESSAGES_PER_THREAD * 5 + 2);
    assert!(!content.contains("[VERBOSE]"));
    assert!(lines
        .iter()
        .filter(|line| line.contains("[FATAL]"))
        .all(|line| line.contains("global_sink.rs:") && line.contains("test_global_configure_and_macros")));
    assert_eq!(lines[lines.len() - 1], "raw line");
    let direct = lines[lines.len() - 2];
    assert!(direct.contains(" [INFO] global_sink.rs:"));
    assert!(direct.ends_with(" global_sink::test_global_configure_and_macros direct call"));

    let metrics = rust_sink_logger::sink().metrics();
    assert_eq!(metrics.filtered() as usize, THREADS * MESSAGES_PER_THREAD);
}

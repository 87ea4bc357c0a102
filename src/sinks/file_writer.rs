//! Append-only file handle with periodic close/reopen
//!
//! `FileWriter` is the plumbing shared by the plain and XML file sinks. It owns
//! the handle and a single readers-writer lock. Every write and every reopen
//! runs under the exclusive guard, so no write can ever observe a handle in the
//! middle of being swapped. The shared guard is only used for the read-only
//! accessors.
//!
//! The handle is closed and reopened once `reopen_interval` has passed since
//! the last attempt. This lets external tools rename the file away: the next
//! cycle recreates it at the configured path.

use crate::core::config::{keys, SinkConfiguration};
use crate::core::error::{LoggerError, Result};
use crate::core::metrics::SinkMetrics;
use parking_lot::RwLock;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Reopen interval used when the configuration does not set one.
pub const DEFAULT_REOPEN_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug, Default)]
struct FileState {
    file: Option<File>,
    /// `None` until the first open attempt.
    last_reopen: Option<Instant>,
}

#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    reopen_interval: Duration,
    state: RwLock<FileState>,
    metrics: SinkMetrics,
}

impl FileWriter {
    /// Create a writer and perform the initial open.
    ///
    /// A failed open is not an error: the writer starts closed, drops lines,
    /// and tries again once the interval has elapsed.
    pub fn new(path: impl Into<PathBuf>, reopen_interval: Duration) -> Self {
        let writer = Self {
            path: path.into(),
            reopen_interval,
            state: RwLock::new(FileState::default()),
            metrics: SinkMetrics::new(),
        };
        writer.reopen();
        writer
    }

    /// Build from the `filename` and `reopen_interval` keys.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `filename` is missing or empty, or
    /// `reopen_interval` is not a whole number of seconds.
    pub fn from_config(component: &str, config: &SinkConfiguration) -> Result<Self> {
        let filename = config.require(component, keys::FILENAME)?;
        if filename.trim().is_empty() {
            return Err(LoggerError::config(component, "'filename' must not be empty"));
        }
        let reopen_interval = match config.get(keys::REOPEN_INTERVAL) {
            Some(value) => parse_reopen_interval(value)?,
            None => DEFAULT_REOPEN_INTERVAL,
        };
        Ok(Self::new(filename, reopen_interval))
    }

    /// Append `line` verbatim and flush.
    ///
    /// Reopens first when the interval has elapsed. Failures are counted in
    /// the metrics and otherwise ignored.
    pub fn write(&self, line: &str) {
        let mut state = self.state.write();
        self.reopen_if_due(&mut state);

        let written = match state.file.as_mut() {
            Some(file) => file
                .write_all(line.as_bytes())
                .and_then(|()| file.flush())
                .is_ok(),
            None => false,
        };

        if written {
            self.metrics.record_written();
        } else {
            self.metrics.record_write_failure();
        }
    }

    /// Run a close/open cycle if the interval has elapsed.
    ///
    /// Returns whether a cycle ran. Calls inside the same interval window are
    /// no-ops.
    pub fn reopen(&self) -> bool {
        let mut state = self.state.write();
        self.reopen_if_due(&mut state)
    }

    fn reopen_if_due(&self, state: &mut FileState) -> bool {
        if let Some(last_reopen) = state.last_reopen {
            if last_reopen.elapsed() < self.reopen_interval {
                return false;
            }
        }

        if let Some(mut file) = state.file.take() {
            // Dropping the handle closes it; nothing to report on failure.
            let _ = file.flush();
        }

        match Self::open_append(&self.path) {
            Ok(file) => state.file = Some(file),
            Err(_) => {
                self.metrics.record_reopen_failure();
            }
        }

        // Stamp after the attempt so a failing open is retried once per interval.
        state.last_reopen = Some(Instant::now());
        self.metrics.record_reopen();
        true
    }

    fn open_append(path: &Path) -> io::Result<File> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }

        OpenOptions::new().create(true).append(true).open(path)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn reopen_interval(&self) -> Duration {
        self.reopen_interval
    }

    /// Whether the handle is currently open.
    pub fn is_open(&self) -> bool {
        self.state.read().file.is_some()
    }

    /// Instant of the last open attempt.
    pub fn last_reopen(&self) -> Option<Instant> {
        self.state.read().last_reopen
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        if let Some(mut file) = self.state.get_mut().file.take() {
            // Best effort flush - ignore errors during drop
            let _ = file.flush();
        }
    }
}

/// Parse a `reopen_interval` value given in whole seconds.
pub fn parse_reopen_interval(value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| LoggerError::reopen_interval(value, e.to_string()))
}

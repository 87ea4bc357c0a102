//! Per-call log record

use super::location::SourceLocation;
use super::severity::Severity;
use super::timestamp;
use chrono::{DateTime, Local};

/// A single log call, borrowed from the caller for the duration of rendering.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub message: &'a str,
    pub severity: Severity,
    pub location: &'a SourceLocation<'a>,
    pub timestamp: DateTime<Local>,
}

impl<'a> LogRecord<'a> {
    /// Build a record stamped with the current local time.
    pub fn new(message: &'a str, severity: Severity, location: &'a SourceLocation<'a>) -> Self {
        Self {
            message,
            severity,
            location,
            timestamp: timestamp::now(),
        }
    }

    /// Replace the timestamp, mainly for deterministic rendering.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn formatted_timestamp(&self) -> String {
        timestamp::iso8601_micros(&self.timestamp)
    }
}

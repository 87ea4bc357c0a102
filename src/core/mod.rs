//! Core logger types and traits

pub mod config;
pub mod error;
pub mod format;
pub mod location;
pub mod metrics;
pub mod record;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use config::{keys, SinkConfiguration};
pub use error::{LoggerError, Result};
pub use format::LineFormat;
pub use location::{SourceLocation, UNSUPPORTED};
pub use metrics::SinkMetrics;
pub use record::LogRecord;
pub use severity::{Severity, Threshold, DEFAULT_THRESHOLD};
pub use sink::Sink;

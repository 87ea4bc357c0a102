//! # Rust Sink Logger
//!
//! A small logging facade built around interchangeable sinks.
//!
//! ## Features
//!
//! - **Severity gating**: six ordered levels, filtered before any formatting
//! - **Sinks**: standard streams, reopening files, XML files and a null sink
//! - **Registry**: build sinks from string-keyed configuration maps
//! - **Global sink**: one process-wide instance behind call-site macros
//!
//! ## Example
//!
//! ```no_run
//! use rust_sink_logger::prelude::*;
//! use rust_sink_logger::{error, info};
//!
//! let config = SinkConfiguration::from([
//!     ("type", "file"),
//!     ("filename", "/var/log/app.log"),
//!     ("reopen_interval", "60"),
//! ]);
//! rust_sink_logger::configure(&config)?;
//!
//! info!("service started");
//! error!("lost connection to {}", "db-1");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod registry;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        keys, LogRecord, LoggerError, Result, Severity, Sink, SinkConfiguration, SinkMetrics,
        SourceLocation, Threshold,
    };
    pub use crate::global::configure;
    pub use crate::location;
    pub use crate::registry::SinkRegistry;
    pub use crate::sinks::{FileSink, NullSink, StdSink, XmlSink};
}

pub use core::{
    keys, LineFormat, LogRecord, LoggerError, Result, Severity, Sink, SinkConfiguration,
    SinkMetrics, SourceLocation, Threshold, DEFAULT_THRESHOLD, UNSUPPORTED,
};
pub use global::{configure, is_configured, sink};
pub use registry::{produce, SinkConstructor, SinkRegistry};
pub use sinks::{FileSink, FileWriter, NullSink, StdSink, Stream, XmlSink, DEFAULT_REOPEN_INTERVAL};

//! Process-wide sink
//!
//! The active sink is installed at most once. [`configure`] installs one
//! from a configuration map; otherwise the first call to [`sink`] installs
//! a colored std sink. Every later call returns the same instance.

use crate::core::{keys, LoggerError, Result, Severity, Sink, SinkConfiguration, SourceLocation};
use crate::registry::SinkRegistry;
use crate::sinks::{NullSink, StdSink};
use once_cell::sync::OnceCell;
use std::fmt;

static ACTIVE_SINK: OnceCell<Box<dyn Sink>> = OnceCell::new();

/// Configuration used when nothing was configured before the first log call.
pub fn default_configuration() -> SinkConfiguration {
    SinkConfiguration::from([(keys::TYPE, StdSink::TYPE), (keys::COLOR, "true")])
}

/// Install the process-wide sink.
///
/// # Errors
///
/// Returns the registry's error when `config` cannot produce a sink, and
/// [`LoggerError::AlreadyConfigured`] once a sink is installed, whether by
/// an earlier `configure` or by a log call that ran first. A failed call
/// installs nothing.
pub fn configure(config: &SinkConfiguration) -> Result<()> {
    let mut installed = false;
    ACTIVE_SINK.get_or_try_init(|| {
        let sink = SinkRegistry::global().produce(config)?;
        installed = true;
        Ok::<_, LoggerError>(sink)
    })?;

    if installed {
        Ok(())
    } else {
        Err(LoggerError::AlreadyConfigured)
    }
}

/// The process-wide sink, installing the default one on first use.
pub fn sink() -> &'static dyn Sink {
    let active = ACTIVE_SINK.get_or_init(|| {
        SinkRegistry::global()
            .produce(&default_configuration())
            .unwrap_or_else(|_| Box::new(NullSink::new()))
    });
    &**active
}

pub fn is_configured() -> bool {
    ACTIVE_SINK.get().is_some()
}

pub fn log(message: &str, severity: Severity, location: &SourceLocation<'_>) {
    sink().log(message, severity, location);
}

/// Entry point of the logging macros.
#[doc(hidden)]
pub fn log_args(severity: Severity, location: &SourceLocation<'_>, args: fmt::Arguments<'_>) {
    sink().log_args(severity, location, args);
}

pub fn log_line(line: &str) {
    sink().log_line(line);
}

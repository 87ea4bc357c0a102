//! Error types for the logger system
//!
//! Only configuration problems leave the crate as errors. I/O failures on the
//! log path are absorbed by the sinks and show up in their metrics instead.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A mandatory configuration key is absent
    #[error("Missing configuration key '{key}' for {component}")]
    MissingKey { component: String, key: String },

    /// No constructor is registered for the requested sink type
    #[error("Couldn't produce sink of type: '{0}'")]
    UnknownSinkType(String),

    /// `reopen_interval` is not a whole number of seconds
    #[error("'{value}' is not a valid reopen interval: {message}")]
    InvalidReopenInterval { value: String, message: String },

    /// Threshold or severity name that does not parse
    #[error("Invalid severity threshold: '{0}'")]
    InvalidThreshold(String),

    /// The process-wide sink was installed before this call
    #[error("Logger already configured")]
    AlreadyConfigured,

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn missing_key(component: impl Into<String>, key: impl Into<String>) -> Self {
        LoggerError::MissingKey {
            component: component.into(),
            key: key.into(),
        }
    }

    pub fn unknown_sink_type(sink_type: impl Into<String>) -> Self {
        LoggerError::UnknownSinkType(sink_type.into())
    }

    pub fn reopen_interval(value: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidReopenInterval {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Whether this error stems from operator configuration rather than I/O.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. }
                | LoggerError::MissingKey { .. }
                | LoggerError::UnknownSinkType(_)
                | LoggerError::InvalidReopenInterval { .. }
                | LoggerError::InvalidThreshold(_)
                | LoggerError::JsonError(_)
        )
    }
}

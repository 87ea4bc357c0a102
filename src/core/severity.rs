//! Severity levels and the threshold that gates them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Verbose = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Fatal = 5,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Upper-case tag used in rendered lines (`[INFO]`, `<severity>INFO</severity>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Position in the total order, starting at 0 for `Verbose`.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Verbose => White,
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warning => Yellow,
            Severity::Error | Severity::Fatal => Red,
        }
    }

    /// Wrap `text` in the bold ANSI sequence for this severity.
    ///
    /// Fatal is painted as a background so it stands out from Error. Emitted
    /// whether or not the output is a terminal.
    #[cfg(feature = "console")]
    pub fn paint(&self, text: &str) -> String {
        let color = self.color_code();
        let code = match self {
            Severity::Fatal => color.to_bg_str(),
            _ => color.to_fg_str(),
        };
        format!("\x1b[1;{code}m{text}\x1b[0m")
    }

    #[cfg(not(feature = "console"))]
    pub fn paint(&self, text: &str) -> String {
        text.to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "VERBOSE" | "TRACE" => Ok(Severity::Verbose),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(LoggerError::InvalidThreshold(s.to_string())),
        }
    }
}

/// Minimum severity a sink accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Threshold {
    /// Accept `severity >= level`.
    At(Severity),
    /// Accept nothing.
    Off,
}

impl Threshold {
    #[inline]
    pub fn allows(&self, severity: Severity) -> bool {
        match self {
            Threshold::At(minimum) => severity >= *minimum,
            Threshold::Off => false,
        }
    }

    /// Number of severities this threshold lets through.
    pub fn accepted_count(&self) -> usize {
        match self {
            Threshold::At(minimum) => Severity::ALL.len() - minimum.ordinal(),
            Threshold::Off => 0,
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        DEFAULT_THRESHOLD
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::At(severity) => write!(f, "{}", severity),
            Threshold::Off => write!(f, "OFF"),
        }
    }
}

impl FromStr for Threshold {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OFF" | "NONE" => Ok(Threshold::Off),
            _ => s.parse().map(Threshold::At),
        }
    }
}

impl From<Severity> for Threshold {
    fn from(severity: Severity) -> Self {
        Threshold::At(severity)
    }
}

/// Threshold compiled into the crate, chosen by the `threshold-*` features.
#[cfg(feature = "threshold-verbose")]
pub const DEFAULT_THRESHOLD: Threshold = Threshold::At(Severity::Verbose);

#[cfg(all(not(feature = "threshold-verbose"), feature = "threshold-debug"))]
pub const DEFAULT_THRESHOLD: Threshold = Threshold::At(Severity::Debug);

#[cfg(all(
    not(any(feature = "threshold-verbose", feature = "threshold-debug")),
    feature = "threshold-warning"
))]
pub const DEFAULT_THRESHOLD: Threshold = Threshold::At(Severity::Warning);

#[cfg(all(
    not(any(
        feature = "threshold-verbose",
        feature = "threshold-debug",
        feature = "threshold-warning"
    )),
    feature = "threshold-error"
))]
pub const DEFAULT_THRESHOLD: Threshold = Threshold::At(Severity::Error);

#[cfg(all(
    not(any(
        feature = "threshold-verbose",
        feature = "threshold-debug",
        feature = "threshold-warning",
        feature = "threshold-error"
    )),
    feature = "threshold-fatal"
))]
pub const DEFAULT_THRESHOLD: Threshold = Threshold::At(Severity::Fatal);

#[cfg(all(
    not(any(
        feature = "threshold-verbose",
        feature = "threshold-debug",
        feature = "threshold-warning",
        feature = "threshold-error",
        feature = "threshold-fatal"
    )),
    feature = "threshold-off"
))]
pub const DEFAULT_THRESHOLD: Threshold = Threshold::Off;

#[cfg(not(any(
    feature = "threshold-verbose",
    feature = "threshold-debug",
    feature = "threshold-warning",
    feature = "threshold-error",
    feature = "threshold-fatal",
    feature = "threshold-off"
)))]
pub const DEFAULT_THRESHOLD: Threshold = Threshold::At(Severity::Info);

//! Timestamp formatting for rendered lines
//!
//! Every sink stamps lines in local time as ISO 8601 with microsecond
//! precision and a colon-separated offset: `2025-01-08T10:30:45.123456+01:00`.

use chrono::{DateTime, Local, TimeZone};

/// strftime pattern shared by all sinks.
pub const ISO8601_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Current local time.
#[inline]
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Render `datetime` in the sink timestamp format.
#[must_use]
pub fn iso8601_micros<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(ISO8601_MICROS).to_string()
}

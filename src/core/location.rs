//! Call-site information attached to every record

use std::fmt;

/// File name used when the call site could not be captured.
pub const UNSUPPORTED: &str = "unsupported";

/// File, line, and enclosing function of a log call.
///
/// Usually built by the [`location!`](crate::location) macro, which yields a
/// `SourceLocation<'static>`. Locations known only at runtime can borrow
/// their strings. A location whose file is [`UNSUPPORTED`] is rendered
/// without any location segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
}

impl<'a> SourceLocation<'a> {
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// The sentinel location for call sites that were not captured.
    pub const fn unsupported() -> Self {
        Self {
            file: UNSUPPORTED,
            line: 0,
            function: "",
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        self.file != UNSUPPORTED
    }

    /// Last path component of `file`, accepting both separators.
    pub fn file_name(&self) -> &'a str {
        match self.file.rfind(['/', '\\']) {
            Some(pos) => &self.file[pos + 1..],
            None => self.file,
        }
    }
}

impl Default for SourceLocation<'_> {
    fn default() -> Self {
        Self::unsupported()
    }
}

impl fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file_name(), self.line, self.function)
    }
}

//! Line rendering shared by the sinks
//!
//! - Plain: `2025-01-08T10:30:45.123456+01:00 [INFO] main.rs:12 app::run Request processed`
//! - Colored: same as plain, with the `[INFO]` tag wrapped in an ANSI sequence
//! - Xml: `<entry><timestamp>…</timestamp>…<message>…</message></entry>`
//!
//! The location segment is left out when the record's location is the
//! `unsupported` sentinel. Message text is written as-is in every format,
//! including XML.

use super::record::LogRecord;

/// Reserved room on top of the message length for the line prefix.
const PLAIN_OVERHEAD: usize = 64;
const XML_OVERHEAD: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineFormat {
    #[default]
    Plain,
    Colored,
    Xml,
}

impl LineFormat {
    /// Render a full newline-terminated line for `record`.
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        match self {
            LineFormat::Plain => format_text(record, false),
            LineFormat::Colored => format_text(record, true),
            LineFormat::Xml => format_xml(record),
        }
    }
}

fn format_text(record: &LogRecord<'_>, use_color: bool) -> String {
    let mut output = String::with_capacity(record.message.len() + PLAIN_OVERHEAD);
    output.push_str(&record.formatted_timestamp());
    output.push(' ');

    let tag = format!("[{}]", record.severity.as_str());
    if use_color {
        output.push_str(&record.severity.paint(&tag));
    } else {
        output.push_str(&tag);
    }
    output.push(' ');

    let location = record.location;
    if location.is_supported() {
        output.push_str(location.file_name());
        output.push(':');
        output.push_str(&location.line.to_string());
        output.push(' ');
        output.push_str(location.function);
        output.push(' ');
    }

    output.push_str(record.message);
    output.push('\n');
    output
}

fn format_xml(record: &LogRecord<'_>) -> String {
    let mut output = String::with_capacity(record.message.len() + XML_OVERHEAD);
    output.push_str("<entry>");
    push_element(&mut output, "timestamp", &record.formatted_timestamp());

    let location = record.location;
    if location.is_supported() {
        push_element(&mut output, "filename", location.file);
        push_element(&mut output, "line", &location.line.to_string());
        push_element(&mut output, "function", location.function);
    }

    push_element(&mut output, "severity", record.severity.as_str());
    push_element(&mut output, "message", record.message);
    output.push_str("</entry>\n");
    output
}

fn push_element(output: &mut String, name: &str, body: &str) {
    output.push('<');
    output.push_str(name);
    output.push('>');
    output.push_str(body);
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

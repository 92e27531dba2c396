//! Structured console logger
//!
//! - One log line = one event
//! - Explicit severity, event token first, then key=value fields
//! - Fields keep call order
//! - Synchronous, no buffering
//! - INFO/WARN to stdout, ERROR/FATAL to stderr

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Degraded but continuing
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable, process exits
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Console logger emitting one structured line per event.
pub struct Logger;

impl Logger {
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields, &mut io::stdout());
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields, &mut io::stdout());
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields, &mut io::stderr());
    }

    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Fatal, event, fields, &mut io::stderr());
    }

    /// Writes one event line to the given writer.
    ///
    /// Values containing whitespace, quotes, or `=` are double-quoted with
    /// internal quotes backslash-escaped, so a line always splits back into
    /// its fields unambiguously.
    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        let mut line = String::with_capacity(64);
        line.push_str(severity.as_str());
        line.push(' ');
        line.push_str(event);

        for (key, value) in fields {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            push_value(&mut line, value);
        }
        line.push('\n');

        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

fn push_value(line: &mut String, value: &str) {
    let needs_quoting =
        value.is_empty() || value.contains(|c: char| c.is_whitespace() || c == '"' || c == '=');
    if needs_quoting {
        line.push('"');
        for c in value.chars() {
            match c {
                '"' => line.push_str("\\\""),
                '\\' => line.push_str("\\\\"),
                '\n' => line.push_str("\\n"),
                c => line.push(c),
            }
        }
        line.push('"');
    } else {
        line.push_str(value);
    }
}

/// Renders an event line into a buffer, for assertions.
#[cfg(test)]
pub fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::emit(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_plain_event_line() {
        let line = capture(Severity::Info, "READ_COMPLETE", &[("records", "10")]);
        assert_eq!(line, "INFO READ_COMPLETE records=10\n");
    }

    #[test]
    fn test_fields_keep_call_order() {
        let line = capture(
            Severity::Info,
            "VALIDATION_COMPLETE",
            &[("valid", "8"), ("invalid", "2")],
        );
        assert_eq!(line, "INFO VALIDATION_COMPLETE valid=8 invalid=2\n");
    }

    #[test]
    fn test_values_with_spaces_are_quoted() {
        let line = capture(Severity::Error, "RUN_ABORTED", &[("error", "cannot read 'x'")]);
        assert_eq!(line, "ERROR RUN_ABORTED error=\"cannot read 'x'\"\n");
    }

    #[test]
    fn test_quotes_and_newlines_escaped() {
        let line = capture(Severity::Warn, "E", &[("v", "a\"b\nc")]);
        assert_eq!(line, "WARN E v=\"a\\\"b\\nc\"\n");
    }

    #[test]
    fn test_empty_value_quoted() {
        let line = capture(Severity::Info, "E", &[("v", "")]);
        assert_eq!(line, "INFO E v=\"\"\n");
    }

    #[test]
    fn test_one_line_per_event() {
        let line = capture(Severity::Info, "E", &[("a", "1"), ("b", "2")]);
        assert_eq!(line.chars().filter(|c| *c == '\n').count(), 1);
        assert!(line.ends_with('\n'));
    }
}

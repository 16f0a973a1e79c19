//! Log record structure

use super::attr::Attr;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::fmt::Write;
use std::panic::Location;

/// One log call, as seen by a handler.
///
/// Records borrow the message and per-call attributes from the caller, so a
/// record only exists for calls that passed the level check.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub time: DateTime<Local>,
    pub level: LogLevel,
    pub message: &'a str,
    pub source: Option<&'static Location<'static>>,
    pub attrs: &'a [Attr],
}

impl<'a> Record<'a> {
    pub fn new(level: LogLevel, message: &'a str, attrs: &'a [Attr]) -> Self {
        Self {
            time: Local::now(),
            level,
            message,
            source: None,
            attrs,
        }
    }

    pub fn with_source(mut self, location: &'static Location<'static>) -> Self {
        self.source = Some(location);
        self
    }

    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }
}

/// Escape control characters so a message can neither span several output
/// lines nor carry terminal escape sequences.
pub(crate) fn sanitize_message(message: &str) -> Cow<'_, str> {
    if !message.chars().any(char::is_control) {
        return Cow::Borrowed(message);
    }

    let mut escaped = String::with_capacity(message.len() + 8);
    for c in message.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{{{:04x}}}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_source() {
        let here = Location::caller();
        let record = Record::new(LogLevel::Info, "hello", &[]).with_source(here);
        assert_eq!(record.source.map(|l| l.file()), Some(file!()));
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(sanitize_message("a\nb\tc"), "a\\nb\\tc");
        assert_eq!(sanitize_message("bell\x07 esc\x1b"), "bell\\u{0007} esc\\u{001b}");
        assert!(matches!(sanitize_message("plain"), Cow::Borrowed("plain")));
    }
}

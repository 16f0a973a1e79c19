//! Timestamp formatting utilities
//!
//! Machine formats (logfmt, JSON) use RFC 3339 with milliseconds and the
//! local offset. The human format uses a compact wall clock.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use logg::core::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Kitchen.format(&Utc::now());
/// assert!(stamp.ends_with("AM") || stamp.ends_with("PM"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with milliseconds: `2025-01-08T10:30:45.123+02:00`
    #[default]
    Rfc3339Millis,

    /// Compact clock: `3:04PM`
    Kitchen,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampFormat::Rfc3339Millis => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
            }
            TimestampFormat::Kitchen => datetime.format("%-I:%M%p").to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

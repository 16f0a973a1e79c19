//! Output format selection
//!
//! - Logfmt: `key=value` pairs (default)
//! - Human: colorized, compact clock, meant for terminals and CLIs
//! - Json: one JSON object per line

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Logfmt format (key=value pairs)
    ///
    /// Example: `time=2025-01-08T15:04:05.123+00:00 level=INFO msg="Request processed" component=api`
    #[default]
    Logfmt,

    /// Colorized human-readable format
    ///
    /// Example: `3:04PM INF Request processed component=api`
    Human,

    /// JSON format for machine processing
    ///
    /// Example: `{"time":"2025-01-08T15:04:05.123+00:00","level":"INFO","msg":"Request processed"}`
    Json,
}

impl FormatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Logfmt => "logfmt",
            FormatType::Human => "human",
            FormatType::Json => "json",
        }
    }

    /// Resolve a format by name. Unknown names fall back to [`FormatType::Logfmt`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "human" | "pretty" | "console" => FormatType::Human,
            "json" => FormatType::Json,
            _ => FormatType::Logfmt,
        }
    }

    /// Resolve a format by its numeric code (0 logfmt, 1 human, 2 json).
    /// Out-of-range codes fall back to [`FormatType::Logfmt`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => FormatType::Human,
            2 => FormatType::Json,
            _ => FormatType::Logfmt,
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FormatType::from_name(s))
    }
}

impl From<&str> for FormatType {
    fn from(s: &str) -> Self {
        FormatType::from_name(s)
    }
}

impl Serialize for FormatType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FormatType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Code(i64),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Name(name) => FormatType::from_name(&name),
            Repr::Code(code) => FormatType::from_code(code),
            Repr::Other(_) => FormatType::Logfmt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default() {
        assert_eq!(FormatType::default(), FormatType::Logfmt);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FormatType::from_name("JSON"), FormatType::Json);
        assert_eq!(FormatType::from_name("human"), FormatType::Human);
        assert_eq!(FormatType::from_name("logfmt"), FormatType::Logfmt);
    }

    #[test]
    fn test_unknown_falls_back_to_logfmt() {
        assert_eq!(FormatType::from_name("yaml"), FormatType::Logfmt);
        assert_eq!(FormatType::from_code(7), FormatType::Logfmt);
        assert_eq!(FormatType::from_code(-1), FormatType::Logfmt);
        assert_eq!("".parse::<FormatType>().unwrap(), FormatType::Logfmt);
    }

    #[test]
    fn test_deserialize_lossy() {
        let f: FormatType = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(f, FormatType::Json);
        let f: FormatType = serde_json::from_str("1").unwrap();
        assert_eq!(f, FormatType::Human);
        let f: FormatType = serde_json::from_str("\"xml\"").unwrap();
        assert_eq!(f, FormatType::Logfmt);
        let f: FormatType = serde_json::from_str("true").unwrap();
        assert_eq!(f, FormatType::Logfmt);
    }

    #[test]
    fn test_serialize_name() {
        assert_eq!(serde_json::to_string(&FormatType::Human).unwrap(), "\"human\"");
    }
}

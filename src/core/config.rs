//! Serde-driven logger configuration
//!
//! `LoggerConfig` is the file/shape form of [`Options`]: everything except the
//! sink, which has no serialized form.
//!
//! ```
//! use logg::core::LoggerConfig;
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "component": "billing",
//!     "format": "json",
//!     "level": "debug",
//!     "extra_attributes": { "region": "us-west", "replica": 2 }
//! }"#).unwrap();
//!
//! let logger = config.into_options(None).build();
//! logger.debug("loaded", &[]);
//! ```

use super::{
    attr::{Attr, Value},
    error::{LoggerError, Result},
    log_level::LogLevel,
    options::Options,
    output_format::FormatType,
    sink::Sink,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub component: String,
    pub group: String,
    /// Unknown names and codes fall back to logfmt
    pub format: FormatType,
    pub level: LogLevel,
    pub no_color: bool,
    /// Object keys keep their file order
    pub extra_attributes: serde_json::Map<String, serde_json::Value>,
}

impl LoggerConfig {
    /// Parse a JSON document. Level names are case-insensitive; an unknown
    /// level is rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut document: serde_json::Value = serde_json::from_str(json)?;

        if let Some(name) = document.get("level").and_then(|l| l.as_str()) {
            let level: LogLevel = name
                .parse()
                .map_err(|e: LoggerError| LoggerError::config("level", e.to_string()))?;
            document["level"] = serde_json::to_value(level)?;
        }

        Ok(serde_json::from_value(document)?)
    }

    pub fn into_options(self, sink: Option<Sink>) -> Options {
        let extra_attributes = self
            .extra_attributes
            .into_iter()
            .map(|(key, value)| Attr::new(key, Value::from(value)))
            .collect();

        Options {
            sink,
            component: self.component,
            group: self.group,
            extra_attributes,
            format: self.format,
            min_level: self.level,
            no_color: self.no_color,
        }
    }
}

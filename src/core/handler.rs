//! Handler trait for formatting and writing records

use super::{
    attr::Attr, error::Result, log_level::LogLevel, record::Record, timestamp::TimestampFormat,
};
use std::sync::Arc;

/// Settings shared by the built-in handlers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Records below this level are dropped
    pub level: LogLevel,
    /// Render the caller's `file:line` on every record
    pub add_source: bool,
    pub time_format: TimestampFormat,
    /// Disable ANSI escapes (human format only)
    pub no_color: bool,
}

/// Formatting/filtering unit bound to a sink.
///
/// `with_attrs` and `with_group` never modify the receiver; they return a new
/// handler carrying the extra binding.
pub trait Handler: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;
    fn handle(&self, record: &Record<'_>) -> Result<()>;
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}

//! Core logger types and traits

pub mod attr;
pub mod config;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod output_format;
pub mod record;
pub mod sink;
pub mod timestamp;

pub use attr::{attr, Attr, Value};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use handler::{Handler, HandlerOptions};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use options::{new_logger, Options};
pub use output_format::FormatType;
pub use record::Record;
pub use sink::Sink;
pub use timestamp::TimestampFormat;

//! # logg
//!
//! Preset structured logger. One call turns a configuration record into a
//! ready-to-use logger bound to a sink.
//!
//! ## Features
//!
//! - **Three formats**: logfmt (default), colorized human output, JSON lines
//! - **Decoration**: a fixed `component` label, an attribute group, and static
//!   extra attributes on every line
//! - **Level filtering**: calls below the minimum level return before any formatting
//! - **Source locations**: enabled automatically at debug level
//! - **Thread safe**: each record is written to the sink in one piece
//!
//! ```
//! use logg::prelude::*;
//!
//! let logger = new_logger(Options {
//!     component: "my-service".to_string(),
//!     min_level: LogLevel::Info,
//!     format: FormatType::Json,
//!     ..Options::default()
//! });
//!
//! logger.info("listening", &[attr("port", 8080)]);
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        attr, new_logger, Attr, FormatType, Handler, HandlerOptions, LogLevel, Logger,
        LoggerConfig, LoggerError, Options, Record, Result, Sink, TimestampFormat, Value,
    };
    pub use crate::handlers::StreamHandler;
}

pub use crate::core::{
    attr, new_logger, Attr, FormatType, Handler, HandlerOptions, LogLevel, Logger, LoggerConfig,
    LoggerError, Options, Record, Result, Sink, TimestampFormat, Value,
};
pub use handlers::StreamHandler;

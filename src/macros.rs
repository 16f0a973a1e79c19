//! Logging macros with inline `key => value` attributes.
//!
//! # Examples
//!
//! ```
//! use logg::prelude::*;
//! use logg::info;
//!
//! let logger = Options::new().build();
//!
//! // Message only
//! info!(logger, "Server started");
//!
//! // With attributes
//! let port = 8080;
//! info!(logger, "Server listening", "port" => port, "tls" => false);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use logg::prelude::*;
/// # let logger = Options::new().build();
/// use logg::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Request failed", "status" => 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.log($level, $msg, &[$($crate::Attr::new($key, $value)),*])
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logg::prelude::*;
/// # let logger = Options::new().min_level(LogLevel::Debug).build();
/// use logg::debug;
/// debug!(logger, "Cache lookup", "hit" => true);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $msg $(, $key => $value)*)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logg::prelude::*;
/// # let logger = Options::new().build();
/// use logg::info;
/// info!(logger, "Processing batch", "items" => 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $msg $(, $key => $value)*)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use logg::prelude::*;
/// # let logger = Options::new().build();
/// use logg::warn;
/// warn!(logger, "Retrying", "attempt" => 3, "max" => 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $msg $(, $key => $value)*)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logg::prelude::*;
/// # let logger = Options::new().build();
/// use logg::error;
/// error!(logger, "Failed to connect", "db" => "primary");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $msg $(, $key => $value)*)
    };
}

//! Main logger implementation

use super::{
    attr::Attr, error::Result, handler::Handler, log_level::LogLevel, record::Record,
};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Structured logger bound to a handler.
///
/// Cloning is cheap and clones share the same handler and sink. Every log
/// method records the caller's `file:line`; the handler decides whether to
/// render it.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    /// Wrap an existing handler
    #[must_use]
    pub fn from_handler(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// Whether a call at `level` would produce output
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.enabled(level)
    }

    /// Log `message` with per-call attributes.
    ///
    /// Calls below the handler's level return before a record is built.
    /// Write failures belong to the sink and are not reported here.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: &str, attrs: &[Attr]) {
        if !self.handler.enabled(level) {
            return;
        }

        let record = Record::new(level, message, attrs).with_source(Location::caller());
        let _ = self.handler.handle(&record);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: &str, attrs: &[Attr]) {
        self.log(LogLevel::Debug, message, attrs);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: &str, attrs: &[Attr]) {
        self.log(LogLevel::Info, message, attrs);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: &str, attrs: &[Attr]) {
        self.log(LogLevel::Warn, message, attrs);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: &str, attrs: &[Attr]) {
        self.log(LogLevel::Error, message, attrs);
    }

    pub fn flush(&self) -> Result<()> {
        self.handler.flush()
    }

    pub(crate) fn with_attrs(&self, attrs: Vec<Attr>) -> Self {
        Self {
            handler: self.handler.with_attrs(attrs),
        }
    }

    pub(crate) fn with_group(&self, name: &str) -> Self {
        Self {
            handler: self.handler.with_group(name),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("handler", &self.handler.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attr;
    use parking_lot::Mutex;

    /// Handler that remembers what it saw
    #[derive(Default)]
    struct Recording {
        level: LogLevel,
        seen: Mutex<Vec<(LogLevel, String, Option<u32>, usize)>>,
    }

    impl Handler for Recording {
        fn enabled(&self, level: LogLevel) -> bool {
            level >= self.level
        }

        fn handle(&self, record: &Record<'_>) -> Result<()> {
            self.seen.lock().push((
                record.level,
                record.message.to_string(),
                record.source.map(|l| l.line()),
                record.attrs.len(),
            ));
            Ok(())
        }

        fn with_attrs(&self, _attrs: Vec<Attr>) -> Arc<dyn Handler> {
            Arc::new(Recording::default())
        }

        fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
            Arc::new(Recording::default())
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[test]
    fn test_filtered_calls_never_reach_handler() {
        let handler = Arc::new(Recording {
            level: LogLevel::Warn,
            ..Recording::default()
        });
        let logger = Logger::from_handler(handler.clone());

        logger.debug("dropped", &[]);
        logger.info("dropped", &[]);
        logger.warn("kept", &[attr("k", "v")]);
        logger.error("kept", &[]);

        let seen = handler.seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, LogLevel::Warn);
        assert_eq!(seen[0].3, 1);
        assert_eq!(seen[1].0, LogLevel::Error);
    }

    #[test]
    fn test_source_points_at_caller() {
        let handler = Arc::new(Recording {
            level: LogLevel::Debug,
            ..Recording::default()
        });
        let logger = Logger::from_handler(handler.clone());

        let line = line!() + 1;
        logger.debug("here", &[]);

        assert_eq!(handler.seen.lock()[0].2, Some(line));
    }

    #[test]
    fn test_enabled() {
        let logger = Logger::from_handler(Arc::new(Recording::default()));
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Info));
    }

    #[test]
    fn test_debug_format() {
        let logger = Logger::from_handler(Arc::new(Recording::default()));
        assert_eq!(format!("{:?}", logger), "Logger { handler: \"recording\" }");
    }
}

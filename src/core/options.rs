//! Logger construction options and the `new_logger` factory

use super::{
    attr::{Attr, Value},
    handler::{Handler, HandlerOptions},
    log_level::LogLevel,
    logger::Logger,
    output_format::FormatType,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::handlers::StreamHandler;
use std::sync::Arc;

/// Configuration record consumed by [`new_logger`].
///
/// Fields can be set directly or through the builder methods.
///
/// # Example
///
/// ```
/// use logg::prelude::*;
///
/// let logger = Options::new()
///     .component("my-service")
///     .extra_attribute("region", "us-west")
///     .format(FormatType::Json)
///     .min_level(LogLevel::Info)
///     .build();
///
/// logger.info("ready", &[attr("port", 8080)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Destination; standard error when `None`
    pub sink: Option<Sink>,
    /// Adds `component=<value>` to every line; empty means omitted
    pub component: String,
    /// Nests per-call keys under `<group>.`; empty means no group
    pub group: String,
    /// Static attributes on every line, in insertion order
    pub extra_attributes: Vec<Attr>,
    pub format: FormatType,
    /// Minimal level to log. `Debug` also turns on source locations.
    pub min_level: LogLevel,
    /// Disable ANSI colors in the human format
    pub no_color: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn extra_attribute<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra_attributes.push(Attr::new(key, value));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn extra_attributes<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Attr>,
    {
        self.extra_attributes.extend(attrs.into_iter().map(Into::into));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: FormatType) -> Self {
        self.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Same as [`new_logger`]
    pub fn build(self) -> Logger {
        new_logger(self)
    }
}

/// Build a logger from `options`.
///
/// Bindings are applied in a fixed order: extra attributes, then
/// `component`, then the group. Only per-call keys end up inside the group.
pub fn new_logger(options: Options) -> Logger {
    let Options {
        sink,
        component,
        group,
        extra_attributes,
        format,
        min_level,
        no_color,
    } = options;

    let handler_options = HandlerOptions {
        level: min_level,
        add_source: min_level <= LogLevel::Debug,
        time_format: match format {
            FormatType::Human => TimestampFormat::Kitchen,
            FormatType::Logfmt | FormatType::Json => TimestampFormat::Rfc3339Millis,
        },
        no_color,
    };

    let mut handler: Arc<dyn Handler> = Arc::new(StreamHandler::new(
        format,
        sink.unwrap_or_default(),
        handler_options,
    ));
    if !extra_attributes.is_empty() {
        handler = handler.with_attrs(extra_attributes);
    }

    let mut logger = Logger::from_handler(handler);
    if !component.is_empty() {
        logger = logger.with_attrs(vec![Attr::new("component", component)]);
    }
    if !group.is_empty() {
        logger = logger.with_group(&group);
    }

    logger
}

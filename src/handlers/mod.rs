//! Built-in handler: one sink, one output format

mod human;
mod json;
mod logfmt;

use crate::core::{
    Attr, FormatType, Handler, HandlerOptions, LogLevel, Record, Result, Sink,
};
use std::sync::Arc;

/// An attribute bound on the handler, with the group path open when it was bound
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BoundAttr {
    pub path: Vec<String>,
    pub attr: Attr,
}

/// Writes each record to a [`Sink`] in one of the [`FormatType`] encodings.
#[derive(Debug, Clone)]
pub struct StreamHandler {
    format: FormatType,
    options: HandlerOptions,
    sink: Sink,
    bound: Vec<BoundAttr>,
    groups: Vec<String>,
}

impl StreamHandler {
    pub fn new(format: FormatType, sink: Sink, options: HandlerOptions) -> Self {
        Self {
            format,
            options,
            sink,
            bound: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn format(&self) -> FormatType {
        self.format
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.options
    }

    /// Encode a record into a single line, trailing newline included
    pub fn encode(&self, record: &Record<'_>) -> Result<String> {
        let mut line = String::with_capacity(256);
        match self.format {
            FormatType::Logfmt => logfmt::encode(&mut line, self.frame(), record),
            FormatType::Human => human::encode(&mut line, self.frame(), record),
            FormatType::Json => json::encode(&mut line, self.frame(), record)?,
        }
        line.push('\n');
        Ok(line)
    }

    fn frame(&self) -> Frame<'_> {
        Frame {
            options: &self.options,
            bound: &self.bound,
            groups: &self.groups,
        }
    }
}

/// Borrowed view of a handler's bindings handed to the encoders
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame<'h> {
    pub options: &'h HandlerOptions,
    pub bound: &'h [BoundAttr],
    pub groups: &'h [String],
}

/// Attributes that will be written; empty keys are skipped
pub(crate) fn visible<'a>(attrs: &'a [Attr]) -> impl Iterator<Item = &'a Attr> {
    attrs.iter().filter(|a| !a.key.is_empty())
}

/// `group.sub.key` for the text encodings
pub(crate) fn qualified_key(path: &[String], key: &str) -> String {
    if path.is_empty() {
        return key.to_string();
    }
    let mut qualified = path.join(".");
    qualified.push('.');
    qualified.push_str(key);
    qualified
}

impl Handler for StreamHandler {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.options.level
    }

    fn handle(&self, record: &Record<'_>) -> Result<()> {
        let line = self.encode(record)?;
        self.sink.write_record(line.as_bytes())?;
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let mut next = self.clone();
        next.bound.extend(
            attrs
                .into_iter()
                .filter(|a| !a.key.is_empty())
                .map(|attr| BoundAttr {
                    path: self.groups.clone(),
                    attr,
                }),
        );
        Arc::new(next)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut next = self.clone();
        if !name.is_empty() {
            next.groups.push(name.to_string());
        }
        Arc::new(next)
    }

    fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    fn name(&self) -> &str {
        self.format.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attr;
    use parking_lot::Mutex;
    use std::io::Write;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    fn handler(format: FormatType, capture: &Capture) -> StreamHandler {
        StreamHandler::new(
            format,
            Sink::from_writer(capture.clone()),
            HandlerOptions::default(),
        )
    }

    #[test]
    fn test_enabled_respects_level() {
        let options = HandlerOptions {
            level: LogLevel::Warn,
            ..HandlerOptions::default()
        };
        let h = StreamHandler::new(FormatType::Logfmt, Sink::from_writer(std::io::sink()), options);

        assert!(!h.enabled(LogLevel::Info));
        assert!(h.enabled(LogLevel::Warn));
        assert!(h.enabled(LogLevel::Error));
    }

    #[test]
    fn test_with_attrs_leaves_original_untouched() -> Result<()> {
        let capture = Capture::default();
        let base = handler(FormatType::Logfmt, &capture);
        let child = base.with_attrs(vec![attr("component", "api")]);

        base.handle(&Record::new(LogLevel::Info, "from base", &[]))?;
        child.handle(&Record::new(LogLevel::Info, "from child", &[]))?;

        let output = capture.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(!lines[0].contains("component"));
        assert!(lines[1].contains("component=api"));
        Ok(())
    }

    #[test]
    fn test_bound_attrs_keep_their_group_path() -> Result<()> {
        let capture = Capture::default();
        let h = handler(FormatType::Logfmt, &capture)
            .with_attrs(vec![attr("top", 0)])
            .with_group("outer")
            .with_attrs(vec![attr("a", 1)])
            .with_group("inner");

        let attrs = [attr("b", 2)];
        h.handle(&Record::new(LogLevel::Info, "m", &attrs))?;

        let output = capture.contents();
        assert!(output.contains(" top=0"));
        assert!(output.contains(" outer.a=1"));
        assert!(output.contains(" outer.inner.b=2"));
        Ok(())
    }

    #[test]
    fn test_empty_names_are_ignored() -> Result<()> {
        let capture = Capture::default();
        let h = handler(FormatType::Logfmt, &capture)
            .with_group("")
            .with_attrs(vec![attr("", "dropped")]);

        let attrs = [attr("k", "v"), attr("", "also dropped")];
        h.handle(&Record::new(LogLevel::Info, "m", &attrs))?;

        let output = capture.contents();
        assert!(output.contains(" k=v"));
        assert!(!output.contains("dropped"));
        Ok(())
    }

    #[test]
    fn test_qualified_key() {
        assert_eq!(qualified_key(&[], "k"), "k");
        assert_eq!(
            qualified_key(&["a".to_string(), "b".to_string()], "k"),
            "a.b.k"
        );
    }

    #[test]
    fn test_encode_is_one_line() -> Result<()> {
        let capture = Capture::default();
        for format in [FormatType::Logfmt, FormatType::Human, FormatType::Json] {
            let record = Record::new(LogLevel::Info, "multi\nline", &[]);
            let line = handler(format, &capture).encode(&record)?;
            assert!(line.ends_with('\n'));
            assert_eq!(line.matches('\n').count(), 1, "{format}: {line}");
        }
        Ok(())
    }
}

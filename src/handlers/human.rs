//! Human encoder: `3:04PM INF source=main.rs:12 message key=value`
//!
//! Time, source and the `key=` marker of each pair are dimmed; the level tag
//! is colored by severity. With `no_color` the pairs are plain logfmt, so
//! `key=value` only matches literally in uncolored output.

use super::logfmt::{write_string, write_value};
use super::{qualified_key, visible, Frame};
use crate::core::record::sanitize_message;
use crate::core::{Attr, Record};

const DIM: &str = "2";

pub(crate) fn encode(out: &mut String, frame: Frame<'_>, record: &Record<'_>) {
    let color = !frame.options.no_color;

    paint(out, color, Some(DIM), &frame.options.time_format.format(&record.time));
    out.push(' ');

    let level_color = record.level.color_code().map(|c| c.to_fg_str());
    paint(out, color, level_color.as_deref(), record.level.short_str());

    if frame.options.add_source {
        if let Some(location) = record.source {
            out.push(' ');
            let source = format!("source={}:{}", location.file(), location.line());
            paint(out, color, Some(DIM), &source);
        }
    }

    if !record.message.is_empty() {
        out.push(' ');
        out.push_str(&sanitize_message(record.message));
    }

    for bound in frame.bound {
        out.push(' ');
        write_pair(out, color, &bound.path, &bound.attr);
    }
    for attr in visible(record.attrs) {
        out.push(' ');
        write_pair(out, color, frame.groups, attr);
    }
}

fn write_pair(out: &mut String, color: bool, path: &[String], attr: &Attr) {
    let mut marker = String::new();
    write_string(&mut marker, &qualified_key(path, &attr.key));
    marker.push('=');
    paint(out, color, Some(DIM), &marker);
    write_value(out, &attr.value);
}

/// Wrap `text` in an SGR escape when coloring is on and a code is given
fn paint(out: &mut String, color: bool, code: Option<&str>, text: &str) {
    match code {
        Some(code) if color => {
            out.push_str("\x1b[");
            out.push_str(code);
            out.push('m');
            out.push_str(text);
            out.push_str("\x1b[0m");
        }
        _ => out.push_str(text),
    }
}

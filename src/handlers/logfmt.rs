//! Logfmt encoder: `time=... level=... source=... msg=... key=value`

use super::{qualified_key, visible, Frame};
use crate::core::{Attr, Record, Value};
use std::fmt::Write;

pub(crate) fn encode(out: &mut String, frame: Frame<'_>, record: &Record<'_>) {
    write_pair(out, "time", &frame.options.time_format.format(&record.time));
    out.push(' ');
    write_pair(out, "level", record.level.to_str());

    if frame.options.add_source {
        if let Some(location) = record.source {
            out.push(' ');
            write_pair(out, "source", &format!("{}:{}", location.file(), location.line()));
        }
    }

    out.push(' ');
    write_pair(out, "msg", record.message);

    for bound in frame.bound {
        out.push(' ');
        write_attr(out, &bound.path, &bound.attr);
    }
    for attr in visible(record.attrs) {
        out.push(' ');
        write_attr(out, frame.groups, attr);
    }
}

/// Write `key=value` for an attribute, qualifying the key with its group path
fn write_attr(out: &mut String, path: &[String], attr: &Attr) {
    let key = qualified_key(path, &attr.key);
    write_string(out, &key);
    out.push('=');
    write_value(out, &attr.value);
}

fn write_pair(out: &mut String, key: &str, value: &str) {
    write_string(out, key);
    out.push('=');
    write_string(out, value);
}

pub(crate) fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => write_string(out, s),
        other => {
            let _ = write!(out, "{}", other);
        }
    }
}

/// Write a key or string value, quoting it only when a bare token would be ambiguous
pub(crate) fn write_string(out: &mut String, s: &str) {
    if needs_quoting(s) {
        quote(out, s);
    } else {
        out.push_str(s);
    }
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s
            .chars()
            .any(|c| c == '"' || c == '=' || c.is_whitespace() || c.is_control())
}

fn quote(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:04x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

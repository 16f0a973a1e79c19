//! JSON encoder: one object per line
//!
//! Groups become nested objects. A group that receives no attribute in a
//! record is left out of that record entirely.
//!
//! Fields are streamed in order and keys may repeat: a per-call attribute
//! named like a fixed field or a bound attribute is written after it and
//! never replaces it.

use super::{visible, Frame};
use crate::core::{Record, Result};
use serde_json::{json, Value as JsonValue};

pub(crate) fn encode(out: &mut String, frame: Frame<'_>, record: &Record<'_>) -> Result<()> {
    let mut object = Object::default();

    object.push(
        "time",
        JsonValue::String(frame.options.time_format.format(&record.time)),
    );
    object.push("level", JsonValue::String(record.level.to_str().to_string()));

    if frame.options.add_source {
        if let Some(location) = record.source {
            object.push(
                "source",
                json!({ "file": location.file(), "line": location.line() }),
            );
        }
    }

    object.push("msg", JsonValue::String(record.message.to_string()));

    for bound in frame.bound {
        object.insert_at(
            &bound.path,
            &bound.attr.key,
            bound.attr.value.to_json_value(),
        );
    }
    for attr in visible(record.attrs) {
        object.insert_at(frame.groups, &attr.key, attr.value.to_json_value());
    }

    object.write(out)
}

enum Field {
    Value(JsonValue),
    Group(Object),
}

/// Ordered object body that keeps duplicate keys
#[derive(Default)]
struct Object {
    fields: Vec<(String, Field)>,
}

impl Object {
    fn push(&mut self, key: &str, value: JsonValue) {
        self.fields.push((key.to_string(), Field::Value(value)));
    }

    /// Append `key` under the nested groups named by `path`, opening them as needed.
    ///
    /// Only groups are matched by name, so a plain field sharing a group's
    /// name is kept next to it.
    fn insert_at(&mut self, path: &[String], key: &str, value: JsonValue) {
        let Some((group, rest)) = path.split_first() else {
            self.push(key, value);
            return;
        };

        let index = self
            .fields
            .iter()
            .position(|(name, field)| name == group && matches!(field, Field::Group(_)))
            .unwrap_or_else(|| {
                self.fields
                    .push((group.clone(), Field::Group(Object::default())));
                self.fields.len() - 1
            });

        if let Some((_, Field::Group(inner))) = self.fields.get_mut(index) {
            inner.insert_at(rest, key, value);
        }
    }

    fn write(&self, out: &mut String) -> Result<()> {
        out.push('{');
        for (i, (key, field)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&serde_json::to_string(key)?);
            out.push(':');
            match field {
                Field::Value(value) => out.push_str(&serde_json::to_string(value)?),
                Field::Group(inner) => inner.write(out)?,
            }
        }
        out.push('}');
        Ok(())
    }
}

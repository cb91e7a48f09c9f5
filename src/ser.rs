use serde::ser::{Serialize, Serializer};
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;
use std::io::Write;

use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// Pretty printer with a four-space indent that keeps the output pure ASCII.
struct JSONFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> JSONFormatter<'a> {
    fn new() -> Self {
        JSONFormatter {
            pretty: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl<'a> Formatter for JSONFormatter<'a> {
    fn begin_array<W: ?Sized>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized>(&mut self, writer: &mut W, first: bool) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized>(&mut self, writer: &mut W, first: bool) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized>(&mut self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> std::io::Result<()>
    where
        W: Write,
    {
        escape_non_ascii(writer, fragment)
    }
}

/// write every non-ASCII char as one or two lowercase `\uXXXX` UTF-16 escapes
fn escape_non_ascii<W: ?Sized>(writer: &mut W, fragment: &str) -> std::io::Result<()>
where
    W: Write,
{
    let mut start = 0;

    for (index, character) in fragment.char_indices() {
        if character.is_ascii() {
            continue;
        }

        writer.write_all(fragment[start..index].as_bytes())?;

        let mut units = [0u16; 2];
        for unit in character.encode_utf16(&mut units) {
            write!(writer, "\\u{:04x}", unit)?;
        }

        start = index + character.len_utf8();
    }

    writer.write_all(fragment[start..].as_bytes())
}

/// Serializes a value with object keys in ascending order at every depth,
/// whatever map type `serde_json` was compiled with.
struct Sorted<'a>(&'a Value);

impl<'a> Serialize for Sorted<'a> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Array(items) => serializer.collect_seq(items.iter().map(Sorted)),
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                serializer.collect_map(entries.into_iter().map(|(key, value)| (key, Sorted(value))))
            }
            scalar => scalar.serialize(serializer),
        }
    }
}

/// Serialize a JSON value to a pretty, key-sorted String ending in a newline
///
/// # Examples
/// ```rust
/// # use rigid_body_convert::ser::to_string_pretty;
/// # use serde_json::json;
/// # fn main() {
///     let text = to_string_pretty(&json!({ "b": 1, "a": [true] })).unwrap();
///     assert_eq!(text, "{\n    \"a\": [\n        true\n    ],\n    \"b\": 1\n}\n");
/// # }
/// ```
pub fn to_string_pretty(input: &Value) -> Result<String> {
    let mut serializer = serde_json::Serializer::with_formatter(vec![], JSONFormatter::new());
    Sorted(input).serialize(&mut serializer)?;
    let mut serialized_string = String::from_utf8(serializer.into_inner())?;
    serialized_string.push('\n');
    Ok(serialized_string)
}

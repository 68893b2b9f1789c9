//! Human-readable rendering of a [`Value`].
//!
//! - integers as decimal text
//! - strings wrapped in double quotes, content written as-is (not re-escaped)
//! - objects as `{"key": value, ...}` in key order
//! - arrays as `[a, b, ...]`
//!
//! Because string content is not re-escaped, output only parses back to the
//! same value when strings contain no `"` or `\`.

use crate::value::Value;
use std::fmt::{self, Write};

/// Render `value` to a new string.
///
/// ```
/// use jsonq_core::{parse, render};
///
/// let doc = parse(r#"{"b": [1, 2], "a": "x"}"#).unwrap();
/// assert_eq!(render(&doc), r#"{"a": "x", "b": [1, 2]}"#);
/// ```
pub fn render(value: &Value) -> String {
    value.to_string()
}

/// Write `value` into any `fmt::Write` sink.
pub fn write_value<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Integer(n) => write!(out, "{n}"),
        Value::String(s) => write_quoted(out, s),
        Value::Object(map) => {
            out.write_char('{')?;
            for (i, (key, child)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_quoted(out, key)?;
                out.write_str(": ")?;
                write_value(out, child)?;
            }
            out.write_char('}')
        }
        Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, item)?;
            }
            out.write_char(']')
        }
    }
}

fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    out.write_str(s)?;
    out.write_char('"')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}

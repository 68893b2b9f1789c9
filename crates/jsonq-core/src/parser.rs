//! Recursive-descent parser from JSON text to a [`Value`] tree.
//!
//! The accepted dialect is JSON without floating point:
//!
//! - objects, arrays, and strings with the standard escapes
//! - integers (`-?[0-9]+`), clamped to the `i64` range on overflow
//! - `true` → `Integer(1)`, `false` and `null` → `Integer(0)`
//!
//! Each parse function takes the input and a cursor and returns the parsed
//! value together with the cursor after it. The first error aborts the whole
//! parse; nothing partial is returned. Containers nest at most [`MAX_DEPTH`]
//! levels deep.

use crate::error::ParseError;
use crate::lexer::{self, peek, skip_whitespace, unexpected};
use crate::value::{Object, Value};

/// Deepest container nesting accepted by [`parse`]. Computed path brackets and
/// function calls in expressions share the same bound.
pub const MAX_DEPTH: usize = 128;

/// Parse a complete document. Only whitespace may follow the root value.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let (value, pos) = parse_value(text, 0, 0)?;
    let pos = skip_whitespace(text, pos);
    if pos < text.len() {
        return Err(ParseError::TrailingCharacters { offset: pos });
    }
    Ok(value)
}

/// Dispatch on the first non-whitespace byte. `depth` counts the containers
/// already open around `pos`.
fn parse_value(text: &str, pos: usize, depth: usize) -> Result<(Value, usize), ParseError> {
    let pos = skip_whitespace(text, pos);
    match peek(text, pos) {
        Some(b'{' | b'[') if depth >= MAX_DEPTH => {
            Err(ParseError::NestingTooDeep { offset: pos })
        }
        Some(b'{') => parse_object(text, pos, depth + 1),
        Some(b'[') => parse_array(text, pos, depth + 1),
        Some(b'"') => {
            let (s, next) = lexer::parse_string(text, pos)?;
            Ok((Value::String(s), next))
        }
        Some(b'-' | b'0'..=b'9') => {
            // A lone sign carries no digits and converts to 0.
            let (n, next) = lexer::scan_integer(text, pos, false);
            Ok((Value::Integer(n.unwrap_or(0)), next))
        }
        Some(b) if b.is_ascii_alphabetic() => parse_literal(text, pos),
        _ => Err(unexpected(text, pos, "a value")),
    }
}

/// `true`, `false` or `null`, matched exactly against the whole alphabetic run.
fn parse_literal(text: &str, start: usize) -> Result<(Value, usize), ParseError> {
    let mut end = start;
    while peek(text, end).is_some_and(|b| b.is_ascii_alphabetic()) {
        end += 1;
    }
    let value = match &text[start..end] {
        "true" => Value::Integer(1),
        "false" | "null" => Value::Integer(0),
        other => {
            return Err(ParseError::InvalidLiteral {
                offset: start,
                literal: other.to_string(),
            })
        }
    };
    Ok((value, end))
}

/// `start` points at `{`. Later duplicate keys replace earlier ones.
fn parse_object(text: &str, start: usize, depth: usize) -> Result<(Value, usize), ParseError> {
    let mut map = Object::new();
    let mut pos = skip_whitespace(text, start + 1);
    if peek(text, pos) == Some(b'}') {
        return Ok((Value::Object(map), pos + 1));
    }

    loop {
        pos = skip_whitespace(text, pos);
        if peek(text, pos) != Some(b'"') {
            return Err(unexpected(text, pos, "a string key"));
        }
        let (key, next) = lexer::parse_string(text, pos)?;

        pos = skip_whitespace(text, next);
        if peek(text, pos) != Some(b':') {
            return Err(unexpected(text, pos, "':' after object key"));
        }

        let (value, next) = parse_value(text, pos + 1, depth)?;
        map.insert(key, value);

        pos = skip_whitespace(text, next);
        match peek(text, pos) {
            Some(b',') => pos += 1,
            Some(b'}') => return Ok((Value::Object(map), pos + 1)),
            _ => return Err(unexpected(text, pos, "',' or '}' in object")),
        }
    }
}

/// `start` points at `[`.
fn parse_array(text: &str, start: usize, depth: usize) -> Result<(Value, usize), ParseError> {
    let mut items = Vec::new();
    let mut pos = skip_whitespace(text, start + 1);
    if peek(text, pos) == Some(b']') {
        return Ok((Value::Array(items), pos + 1));
    }

    loop {
        let (value, next) = parse_value(text, pos, depth)?;
        items.push(value);

        pos = skip_whitespace(text, next);
        match peek(text, pos) {
            Some(b',') => pos += 1,
            Some(b']') => return Ok((Value::Array(items), pos + 1)),
            _ => return Err(unexpected(text, pos, "',' or ']' in array")),
        }
    }
}

//! Path navigation over a [`Value`] tree.
//!
//! # Syntax
//!
//! - `a.b.c` -- object keys, each an identifier (`[A-Za-z_][A-Za-z0-9_]*`)
//! - `a["key with spaces"]` -- quoted key, same escapes as JSON strings
//! - `a[2]`, `a[-1]` -- array index (negative indices never match)
//! - `a[b.c]` -- computed key or index: the inner path is resolved against the
//!   **document root**, not the current position, and its value becomes the
//!   key (string) or index (integer)
//!
//! Computed brackets nest up to [`MAX_DEPTH`] levels, so `a.b[a.b[a.b[0]]]` is
//! valid. The empty path
//! resolves to the root itself.
//!
//! Resolution happens in two passes: the path text is first turned into a list
//! of [`PathSegment`]s (evaluating every computed bracket on the way), then the
//! segments are applied to the root one after another.

use crate::error::PathError;
use crate::lexer::{self, is_ident_start, peek, scan_identifier, skip_whitespace};
use crate::parser::MAX_DEPTH;
use crate::value::Value;
use tracing::trace;

/// One navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Select an object entry.
    Key(String),
    /// Select an array element. Kept signed so a negative literal or computed
    /// index fails as out of bounds when it is applied.
    Index(i64),
}

/// Resolve `path` against `root`, borrowing the target value.
///
/// # Examples
///
/// ```
/// use jsonq_core::{parse, path::resolve, Value};
///
/// let doc = parse(r#"{"a": {"b": [1, 2, {"c": "test"}]}}"#).unwrap();
/// let found = resolve("a.b[a.b[1]].c", &doc).unwrap();
/// assert_eq!(found, &Value::from("test"));
/// ```
pub fn resolve<'a>(path: &str, root: &'a Value) -> Result<&'a Value, PathError> {
    let segments = parse_path(path, root)?;
    navigate(root, &segments)
}

/// Parse `path` into segments, folding computed brackets into plain keys and
/// indices. The whole input must be consumed.
pub fn parse_path(path: &str, root: &Value) -> Result<Vec<PathSegment>, PathError> {
    let (segments, end) = parse_segments(path, 0, root, 0)?;
    if end < path.len() {
        return Err(syntax(end, "unexpected character in path"));
    }
    Ok(segments)
}

/// Resolve the longest path that starts at `pos` in `text`, returning the
/// target and the cursor just past the path. Used by the expression engine to
/// delegate a path in place.
pub fn resolve_prefix<'a>(
    text: &str,
    pos: usize,
    root: &'a Value,
) -> Result<(&'a Value, usize), PathError> {
    let (segments, end) = parse_segments(text, pos, root, 0)?;
    Ok((navigate(root, &segments)?, end))
}

/// Apply `segments` to `root` in order.
pub fn navigate<'a>(root: &'a Value, segments: &[PathSegment]) -> Result<&'a Value, PathError> {
    segments.iter().try_fold(root, step)
}

fn step<'a>(current: &'a Value, segment: &PathSegment) -> Result<&'a Value, PathError> {
    match segment {
        PathSegment::Key(key) => current
            .get(key)
            .ok_or_else(|| PathError::KeyNotFound { key: key.clone() }),
        PathSegment::Index(index) => usize::try_from(*index)
            .ok()
            .and_then(|i| current.get_index(i))
            .ok_or(PathError::IndexOutOfBounds { index: *index }),
    }
}

/// Collect segments starting at `start`. Stops (without error) at the first
/// byte that cannot continue a path; callers decide whether that is valid.
/// `depth` counts the computed brackets enclosing `start`.
fn parse_segments(
    text: &str,
    start: usize,
    root: &Value,
    depth: usize,
) -> Result<(Vec<PathSegment>, usize), PathError> {
    let mut segments = Vec::new();
    let mut pos = start;

    if peek(text, pos).is_some_and(is_ident_start) {
        let end = scan_identifier(text, pos);
        segments.push(PathSegment::Key(text[pos..end].to_string()));
        pos = end;
    }

    loop {
        match peek(text, pos) {
            Some(b'.') if !segments.is_empty() => {
                let ident = pos + 1;
                if !peek(text, ident).is_some_and(is_ident_start) {
                    return Err(syntax(ident, "expected identifier after '.'"));
                }
                let end = scan_identifier(text, ident);
                segments.push(PathSegment::Key(text[ident..end].to_string()));
                pos = end;
            }
            Some(b'[') => {
                let (segment, next) = parse_bracket(text, pos, root, depth)?;
                segments.push(segment);
                pos = next;
            }
            _ => return Ok((segments, pos)),
        }
    }
}

/// `open` points at `[`. Returns the segment and the cursor after `]`.
fn parse_bracket(
    text: &str,
    open: usize,
    root: &Value,
    depth: usize,
) -> Result<(PathSegment, usize), PathError> {
    let pos = skip_whitespace(text, open + 1);

    let (segment, next) = match peek(text, pos) {
        None => return Err(syntax(pos, "unclosed '['")),
        Some(b']') => return Err(syntax(pos, "empty bracket expression")),
        Some(b'"') => {
            let (key, next) = lexer::parse_string(text, pos)?;
            (PathSegment::Key(key), next)
        }
        Some(b'-' | b'+' | b'0'..=b'9') => match lexer::scan_integer(text, pos, true) {
            (Some(index), next) => (PathSegment::Index(index), next),
            (None, next) => return Err(syntax(next, "expected digits in index")),
        },
        Some(_) if depth >= MAX_DEPTH => {
            return Err(PathError::NestingTooDeep { offset: pos });
        }
        Some(_) => {
            let (inner, next) = parse_segments(text, pos, root, depth + 1)?;
            if inner.is_empty() {
                return Err(syntax(pos, "invalid bracket expression"));
            }
            let value = navigate(root, &inner)?;
            trace!(
                expression = &text[pos..next],
                result = value.type_name(),
                "resolved computed bracket"
            );
            (segment_from_value(value)?, next)
        }
    };

    let close = skip_whitespace(text, next);
    match peek(text, close) {
        Some(b']') => Ok((segment, close + 1)),
        None => Err(syntax(close, "unclosed '['")),
        Some(_) => Err(syntax(close, "expected ']'")),
    }
}

/// Turn the value of a computed bracket into a key or index.
fn segment_from_value(value: &Value) -> Result<PathSegment, PathError> {
    match value {
        Value::Integer(n) => Ok(PathSegment::Index(*n)),
        Value::String(s) => Ok(PathSegment::Key(s.clone())),
        Value::Object(_) | Value::Array(_) => Err(PathError::InvalidIndexType {
            found: value.type_name(),
        }),
    }
}

fn syntax(offset: usize, message: &str) -> PathError {
    PathError::Syntax {
        offset,
        message: message.to_string(),
    }
}

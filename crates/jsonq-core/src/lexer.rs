//! Cursor-based scanning helpers shared by the document parser, the path
//! resolver and the expression engine.
//!
//! Every function takes the full input and a byte cursor and returns the cursor
//! just past whatever it consumed, so recursive callers never share mutable
//! scanner state.

use crate::error::ParseError;

/// Byte at `pos`, if any.
pub(crate) fn peek(text: &str, pos: usize) -> Option<u8> {
    text.as_bytes().get(pos).copied()
}

/// The full character starting at `pos`, for error messages.
///
/// Callers only pass positions that sit on a character boundary (just after
/// an ASCII delimiter or at the start of a token).
pub(crate) fn char_at(text: &str, pos: usize) -> char {
    text.get(pos..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Skip ASCII whitespace (space, tab, LF, FF, CR).
pub(crate) fn skip_whitespace(text: &str, mut pos: usize) -> usize {
    while peek(text, pos).is_some_and(|b| b.is_ascii_whitespace()) {
        pos += 1;
    }
    pos
}

/// Error for a token that is not what the grammar expects at `pos`.
pub(crate) fn unexpected(text: &str, pos: usize, expected: &'static str) -> ParseError {
    if pos >= text.len() {
        ParseError::UnexpectedEnd {
            offset: pos,
            expected,
        }
    } else {
        ParseError::UnexpectedChar {
            offset: pos,
            found: char_at(text, pos),
            expected,
        }
    }
}

pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

pub(crate) fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// End of the identifier starting at `pos` (`[A-Za-z_][A-Za-z0-9_]*`).
pub(crate) fn scan_identifier(text: &str, mut pos: usize) -> usize {
    while peek(text, pos).is_some_and(is_ident_char) {
        pos += 1;
    }
    pos
}

/// Scan an optionally signed decimal integer.
///
/// `-` is always accepted as a sign; `+` only when `allow_plus` is set.
/// Values beyond the `i64` range clamp to `i64::MAX` / `i64::MIN`. Returns
/// `None` for the value when the sign is not followed by any digit.
pub(crate) fn scan_integer(text: &str, start: usize, allow_plus: bool) -> (Option<i64>, usize) {
    let mut pos = start;
    let negative = match peek(text, pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') if allow_plus => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    let mut value: i64 = 0;
    while let Some(b) = peek(text, pos).filter(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
        pos += 1;
    }

    if pos == digits_start {
        (None, pos)
    } else {
        (Some(value), pos)
    }
}

/// Parse a double-quoted string literal whose opening quote is at `start`.
///
/// Supports `\" \\ \/ \b \f \n \r \t \uXXXX`. A `\u` escape keeps only the low
/// byte of the code point, stored as the matching U+0000..=U+00FF character.
pub(crate) fn parse_string(text: &str, start: usize) -> Result<(String, usize), ParseError> {
    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut pos = start + 1;
    let mut run_start = pos;

    while let Some(&b) = bytes.get(pos) {
        match b {
            b'"' => {
                out.push_str(&text[run_start..pos]);
                return Ok((out, pos + 1));
            }
            b'\\' => {
                out.push_str(&text[run_start..pos]);
                let escape = pos + 1;
                pos = match peek(text, escape) {
                    None => return Err(ParseError::UnterminatedString { offset: start }),
                    Some(b'u') => {
                        let (ch, next) = parse_unicode_escape(text, pos)?;
                        out.push(ch);
                        next
                    }
                    Some(c) => {
                        let ch = unescape(c).ok_or_else(|| ParseError::InvalidEscape {
                            offset: pos,
                            found: char_at(text, escape),
                        })?;
                        out.push(ch);
                        escape + 1
                    }
                };
                run_start = pos;
            }
            _ => pos += 1,
        }
    }

    Err(ParseError::UnterminatedString { offset: start })
}

/// Single-character escapes.
fn unescape(c: u8) -> Option<char> {
    let ch = match c {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\u{8}',
        b'f' => '\u{c}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        _ => return None,
    };
    Some(ch)
}

/// `backslash` points at the `\` of a `\uXXXX` escape.
fn parse_unicode_escape(text: &str, backslash: usize) -> Result<(char, usize), ParseError> {
    let digits_start = backslash + 2;
    let digits_end = digits_start + 4;
    let incomplete = ParseError::IncompleteUnicodeEscape { offset: backslash };

    let hex = text
        .as_bytes()
        .get(digits_start..digits_end)
        .filter(|digits| digits.iter().all(u8::is_ascii_hexdigit))
        .ok_or(incomplete)?;

    let code_point = hex
        .iter()
        .fold(0u32, |acc, &d| (acc << 4) | hex_value(d));
    Ok((char::from((code_point & 0xFF) as u8), digits_end))
}

fn hex_value(d: u8) -> u32 {
    match d {
        b'0'..=b'9' => u32::from(d - b'0'),
        b'a'..=b'f' => u32::from(d - b'a' + 10),
        _ => u32::from(d - b'A' + 10),
    }
}

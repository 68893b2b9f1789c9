//! Error types for parsing, path resolution and expression evaluation.
//!
//! Each stage has its own error enum so callers can tell a malformed document
//! from a navigation failure from a bad query. [`Error`] wraps all three for the
//! top-level `evaluate` entry points.

use thiserror::Error;

/// Malformed JSON text. Offsets are byte positions into the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input at offset {offset}: expected {expected}")]
    UnexpectedEnd {
        offset: usize,
        expected: &'static str,
    },

    #[error("unexpected character {found:?} at offset {offset}: expected {expected}")]
    UnexpectedChar {
        offset: usize,
        found: char,
        expected: &'static str,
    },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("invalid escape sequence \\{found} at offset {offset}")]
    InvalidEscape { offset: usize, found: char },

    #[error("incomplete unicode escape sequence at offset {offset}")]
    IncompleteUnicodeEscape { offset: usize },

    #[error("invalid literal {literal:?} at offset {offset}")]
    InvalidLiteral { offset: usize, literal: String },

    #[error("unexpected trailing characters at offset {offset}")]
    TrailingCharacters { offset: usize },

    #[error("maximum nesting depth exceeded at offset {offset}")]
    NestingTooDeep { offset: usize },
}

impl ParseError {
    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd { offset, .. }
            | ParseError::UnexpectedChar { offset, .. }
            | ParseError::UnterminatedString { offset }
            | ParseError::InvalidEscape { offset, .. }
            | ParseError::IncompleteUnicodeEscape { offset }
            | ParseError::InvalidLiteral { offset, .. }
            | ParseError::TrailingCharacters { offset }
            | ParseError::NestingTooDeep { offset } => *offset,
        }
    }
}

/// A path failed to navigate the document, or was not a valid path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("key not found: {key:?}")]
    KeyNotFound { key: String },

    #[error("index out of bounds: {index}")]
    IndexOutOfBounds { index: i64 },

    /// A nested bracket expression resolved to something that is neither a
    /// string (key) nor an integer (index).
    #[error("invalid index type: bracket expression yielded {found}")]
    InvalidIndexType { found: &'static str },

    /// Malformed path text. Only [`crate::path`] callers see this; inside an
    /// expression it is reported as [`EvalError::Syntax`].
    #[error("invalid path at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("computed brackets nested too deeply at offset {offset}")]
    NestingTooDeep { offset: usize },
}

impl From<ParseError> for PathError {
    fn from(err: ParseError) -> Self {
        PathError::Syntax {
            offset: err.offset(),
            message: err.to_string(),
        }
    }
}

/// Failure inside the expression engine itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("{function} requires {requirement}")]
    Arity {
        function: String,
        requirement: String,
    },

    #[error("{function}: unsupported type {found}")]
    UnsupportedType {
        function: &'static str,
        found: &'static str,
    },

    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected characters at end of expression (offset {offset})")]
    TrailingInput { offset: usize },

    #[error("expression nested too deeply at offset {offset}")]
    NestingTooDeep { offset: usize },
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        EvalError::Syntax {
            offset: err.offset(),
            message: err.to_string(),
        }
    }
}

/// Any error produced by the jsonq pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("path error: {0}")]
    Path(#[from] PathError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Convenience alias used throughout jsonq-core.
pub type Result<T> = std::result::Result<T, Error>;

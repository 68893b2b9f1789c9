//! A parsed document and the top-level `construct` / `evaluate` entry points.

use crate::engine::Evaluator;
use crate::error::{ParseError, PathError, Result};
use crate::functions::Registry;
use crate::parser;
use crate::path;
use crate::value::Value;
use std::str::FromStr;
use tracing::debug;

/// An immutable parsed JSON document.
///
/// The root is never modified after construction, so a `Document` can be
/// shared across threads and queried concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parse JSON text into a document.
    pub fn parse(text: &str) -> std::result::Result<Self, ParseError> {
        let root = parser::parse(text)?;
        debug!(bytes = text.len(), root = root.type_name(), "parsed document");
        Ok(Self { root })
    }

    /// Wrap an already built value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }

    /// Resolve a bare path (no function calls) against the root.
    pub fn get(&self, path: &str) -> std::result::Result<&Value, PathError> {
        path::resolve(path, &self.root)
    }

    /// Evaluate an expression with the built-in functions.
    pub fn evaluate(&self, expression: &str) -> Result<Value> {
        Evaluator::new(&self.root).evaluate(expression)
    }

    /// Evaluate an expression with a caller-supplied function registry.
    pub fn evaluate_with(&self, expression: &str, registry: &Registry) -> Result<Value> {
        Evaluator::with_registry(&self.root, registry).evaluate(expression)
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(text)
    }
}

/// Build a document from JSON text.
pub fn construct(text: &str) -> std::result::Result<Document, ParseError> {
    Document::parse(text)
}

/// Evaluate `expression` against `document`.
///
/// ```
/// use jsonq_core::{construct, evaluate, Value};
///
/// let doc = construct(r#"{"items": [3, 9, 4]}"#).unwrap();
/// assert_eq!(evaluate(&doc, "max(items[0], items[1], items[2])").unwrap(), Value::Integer(9));
/// ```
pub fn evaluate(document: &Document, expression: &str) -> Result<Value> {
    document.evaluate(expression)
}

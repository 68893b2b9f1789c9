//! The in-memory value tree produced by the parser.
//!
//! The dialect has no floats and no dedicated boolean or null: `true` is
//! stored as `Integer(1)`, `false` and `null` as `Integer(0)`. Objects use a
//! `BTreeMap` so iteration is always in key-sorted (canonical) order.

use serde::Serialize;
use std::collections::BTreeMap;

/// Object payload: keys are unique and iterate in sorted order.
pub type Object = BTreeMap<String, Value>;

/// A parsed JSON value.
///
/// Serializes as plain JSON (`Integer` → number, `String` → string,
/// `Object` → map, `Array` → sequence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    String(String),
    Object(Object),
    Array(Vec<Value>),
}

impl Value {
    /// Name of the active variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Element at `index` if this is an array and the index is in range.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Entry count for objects, element count for arrays, character count for
    /// strings. Integers have no length.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Integer(_) => None,
            Value::String(s) => Some(s.chars().count()),
            Value::Object(map) => Some(map.len()),
            Value::Array(items) => Some(items.len()),
        }
    }

    /// True for an empty string, object or array.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

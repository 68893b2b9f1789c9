//! # jsonq-core
//!
//! Parser and query engine for an integer-only JSON dialect.
//!
//! Documents are parsed into an immutable [`Value`] tree. Queries combine
//! dotted/bracketed paths, where a bracket may itself contain a path resolved
//! against the document root, with aggregate functions (`size`, `min`, `max`)
//! and integer literals.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonq_core::{construct, Value};
//!
//! let doc = construct(r#"{"a": {"b": [1, 2, {"c": "test"}, [11, 12]]}}"#).unwrap();
//!
//! // a.b[1] is 2, so the outer bracket selects a.b[2]
//! assert_eq!(doc.get("a.b[a.b[1]].c").unwrap(), &Value::from("test"));
//! assert_eq!(doc.evaluate("min(size(a.b[a.b[1]].c), 1)").unwrap(), Value::Integer(1));
//! assert_eq!(doc.evaluate("size(a)").unwrap().to_string(), "1");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - JSON text → [`Value`]
//! - [`path`] - path navigation with computed brackets
//! - [`engine`] - expression evaluation ([`Evaluator`])
//! - [`functions`] - function [`Registry`] and the built-ins
//! - [`printer`] - [`Value`] → human-readable text
//! - [`document`] - [`Document`] wrapper, `construct` / `evaluate`
//! - [`error`] - error types for each stage

pub mod document;
pub mod engine;
pub mod error;
pub mod functions;
mod lexer;
pub mod parser;
pub mod path;
pub mod printer;
pub mod value;

pub use document::{construct, evaluate, Document};
pub use engine::Evaluator;
pub use error::{Error, EvalError, ParseError, PathError, Result};
pub use functions::{Function, Registry};
pub use parser::{parse, MAX_DEPTH};
pub use path::{resolve, PathSegment};
pub use printer::render;
pub use value::{Object, Value};

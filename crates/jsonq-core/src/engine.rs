//! Expression evaluation: function calls, integer literals and paths.
//!
//! ```text
//! expr         := call | path | integer
//! call         := identifier '(' (expr (',' expr)*)? ')'
//! integer      := '-'? digit+
//! ```
//!
//! An identifier followed (after optional whitespace) by `(` is a function call;
//! any other identifier starts a path, which is handed to [`crate::path`]
//! together with its `.key` / `[...]` continuation and resolved against the
//! document root. Function arguments are evaluated left to right before the
//! function is looked up.
//!
//! Malformed path text is a malformed expression and reports
//! [`EvalError::Syntax`]; only navigation failures surface as path errors.
//! Calls nest at most [`MAX_DEPTH`] levels deep.

use crate::error::{EvalError, PathError, Result};
use crate::functions::Registry;
use crate::lexer::{self, char_at, is_ident_start, peek, scan_identifier, skip_whitespace};
use crate::parser::MAX_DEPTH;
use crate::path;
use crate::value::Value;

/// Evaluates expressions against a fixed document root.
///
/// Holds only shared references, so one evaluator can serve any number of
/// calls, and evaluators over the same document can run on several threads.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    root: &'a Value,
    registry: &'a Registry,
}

impl<'a> Evaluator<'a> {
    /// Evaluator using the built-in functions.
    pub fn new(root: &'a Value) -> Self {
        Self::with_registry(root, Registry::shared())
    }

    /// Evaluator using a caller-supplied function table.
    pub fn with_registry(root: &'a Value, registry: &'a Registry) -> Self {
        Self { root, registry }
    }

    /// Evaluate a complete expression. Anything other than whitespace after the
    /// expression is an error, even if the expression itself is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonq_core::{parse, Evaluator, Value};
    ///
    /// let doc = parse(r#"{"a": {"b": [1, 2, {"c": "test"}, [11, 12]]}}"#).unwrap();
    /// let eval = Evaluator::new(&doc);
    /// assert_eq!(eval.evaluate("size(a.b)").unwrap(), Value::Integer(4));
    /// assert_eq!(eval.evaluate("max(size(a.b[a.b[1]].c), 1)").unwrap(), Value::Integer(4));
    /// ```
    pub fn evaluate(&self, expression: &str) -> Result<Value> {
        let (value, pos) = self.eval_expr(expression, 0, 0)?;
        let pos = skip_whitespace(expression, pos);
        if pos < expression.len() {
            return Err(EvalError::TrailingInput { offset: pos }.into());
        }
        Ok(value)
    }

    /// `depth` counts the function calls enclosing `pos`.
    fn eval_expr(&self, text: &str, pos: usize, depth: usize) -> Result<(Value, usize)> {
        let pos = skip_whitespace(text, pos);
        match peek(text, pos) {
            None => Err(EvalError::UnexpectedEnd.into()),
            Some(b) if is_ident_start(b) => {
                let name_end = scan_identifier(text, pos);
                let after = skip_whitespace(text, name_end);
                if peek(text, after) == Some(b'(') {
                    if depth >= MAX_DEPTH {
                        return Err(EvalError::NestingTooDeep { offset: pos }.into());
                    }
                    self.eval_call(text, &text[pos..name_end], after + 1, depth + 1)
                } else {
                    let (value, next) =
                        path::resolve_prefix(text, pos, self.root).map_err(path_error)?;
                    Ok((value.clone(), next))
                }
            }
            Some(b'-' | b'0'..=b'9') => match lexer::scan_integer(text, pos, false) {
                (Some(n), next) => Ok((Value::Integer(n), next)),
                (None, next) => Err(syntax(next, "expected digits in integer literal")),
            },
            Some(_) => Err(syntax(
                pos,
                &format!("unexpected character {:?}", char_at(text, pos)),
            )),
        }
    }

    /// `pos` points just past the opening parenthesis.
    fn eval_call(
        &self,
        text: &str,
        name: &str,
        pos: usize,
        depth: usize,
    ) -> Result<(Value, usize)> {
        let mut args = Vec::new();
        let mut pos = skip_whitespace(text, pos);

        if peek(text, pos) == Some(b')') {
            pos += 1;
        } else {
            loop {
                let (arg, next) = self.eval_expr(text, pos, depth)?;
                args.push(arg);

                pos = skip_whitespace(text, next);
                match peek(text, pos) {
                    Some(b',') => pos += 1,
                    Some(b')') => {
                        pos += 1;
                        break;
                    }
                    None => return Err(EvalError::UnexpectedEnd.into()),
                    Some(_) => return Err(syntax(pos, "expected ',' or ')' in function call")),
                }
            }
        }

        let value = self.registry.call(name, &args)?;
        Ok((value, pos))
    }
}

fn path_error(err: PathError) -> crate::Error {
    match err {
        PathError::Syntax { offset, message } => EvalError::Syntax { offset, message }.into(),
        PathError::NestingTooDeep { offset } => EvalError::NestingTooDeep { offset }.into(),
        navigation => navigation.into(),
    }
}

fn syntax(offset: usize, message: &str) -> crate::Error {
    EvalError::Syntax {
        offset,
        message: message.to_string(),
    }
    .into()
}

//! Function registry for the expression engine.
//!
//! A [`Registry`] maps names to [`Function`] entries. Each entry declares its
//! accepted argument count; the registry checks arity before dispatching, so
//! implementations can rely on the declared shape of their arguments.
//!
//! The default table is built once and never mutated afterwards. Callers that
//! want extra functions build their own with [`Registry::builtins`] plus
//! [`Registry::register`] and hand it to the evaluator.

use crate::error::EvalError;
use crate::value::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;

/// Signature shared by every function implementation.
pub type FunctionImpl = fn(&[Value]) -> Result<Value, EvalError>;

/// A named function with its arity.
#[derive(Debug, Clone, Copy)]
pub struct Function {
    pub name: &'static str,
    pub min_args: usize,
    /// `None` = unbounded.
    pub max_args: Option<usize>,
    pub eval: FunctionImpl,
}

impl Function {
    /// The error reported when this function gets the wrong number of arguments.
    pub fn arity_error(&self) -> EvalError {
        EvalError::Arity {
            function: self.name.to_string(),
            requirement: self.requirement(),
        }
    }

    fn accepts(&self, count: usize) -> bool {
        count >= self.min_args && self.max_args.is_none_or(|max| count <= max)
    }

    fn requirement(&self) -> String {
        match (self.min_args, self.max_args) {
            (0, Some(0)) => "no arguments".to_string(),
            (min, Some(max)) if min == max => format!("exactly {}", arguments(min)),
            (min, Some(max)) => format!("between {min} and {}", arguments(max)),
            (min, None) => format!("at least {}", arguments(min)),
        }
    }
}

fn arguments(n: usize) -> String {
    match n {
        1 => "one argument".to_string(),
        n => format!("{n} arguments"),
    }
}

pub const SIZE: Function = Function {
    name: "size",
    min_args: 1,
    max_args: Some(1),
    eval: size,
};

pub const MIN: Function = Function {
    name: "min",
    min_args: 1,
    max_args: None,
    eval: min,
};

pub const MAX: Function = Function {
    name: "max",
    min_args: 1,
    max_args: None,
    eval: max,
};

static BUILTINS: LazyLock<Registry> = LazyLock::new(Registry::builtins);

/// Name → function lookup table.
#[derive(Debug, Clone)]
pub struct Registry {
    functions: HashMap<&'static str, Function>,
}

impl Registry {
    /// A registry with no functions.
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// A fresh registry holding `size`, `min` and `max`.
    pub fn builtins() -> Self {
        let mut registry = Self::empty();
        for function in [SIZE, MIN, MAX] {
            registry.register(function);
        }
        registry
    }

    /// The shared, immutable built-in registry.
    pub fn shared() -> &'static Registry {
        &BUILTINS
    }

    /// Add `function`, returning the entry it replaced, if any.
    pub fn register(&mut self, function: Function) -> Option<Function> {
        self.functions.insert(function.name, function)
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Look up `name`, check arity and run it.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, EvalError> {
        let function = self
            .get(name)
            .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
        if !function.accepts(args.len()) {
            return Err(function.arity_error());
        }
        trace!(function = name, args = args.len(), "calling function");
        (function.eval)(args)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtins()
    }
}

/// Total order used by `min` and `max`.
///
/// Types rank `Integer < String < Array < Object`. Within a type, integers
/// compare numerically, strings byte-lexicographically, and arrays and
/// objects by their element/entry count.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    type_rank(a).cmp(&type_rank(b)).then_with(|| match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => a.len().cmp(&b.len()),
    })
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Integer(_) => 0,
        Value::String(_) => 1,
        Value::Array(_) => 2,
        Value::Object(_) => 3,
    }
}

/// Scan for the extreme argument; ties keep the earliest one.
fn extremum(args: &[Value], wanted: Ordering) -> Option<&Value> {
    let (first, rest) = args.split_first()?;
    Some(rest.iter().fold(first, |best, candidate| {
        if compare(candidate, best) == wanted {
            candidate
        } else {
            best
        }
    }))
}

fn size(args: &[Value]) -> Result<Value, EvalError> {
    let [value] = args else {
        return Err(SIZE.arity_error());
    };
    let len = value.len().ok_or(EvalError::UnsupportedType {
        function: SIZE.name,
        found: value.type_name(),
    })?;
    Ok(Value::Integer(i64::try_from(len).unwrap_or(i64::MAX)))
}

fn min(args: &[Value]) -> Result<Value, EvalError> {
    extremum(args, Ordering::Less)
        .cloned()
        .ok_or_else(|| MIN.arity_error())
}

fn max(args: &[Value]) -> Result<Value, EvalError> {
    extremum(args, Ordering::Greater)
        .cloned()
        .ok_or_else(|| MAX.arity_error())
}

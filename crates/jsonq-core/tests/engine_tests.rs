use jsonq_core::functions::{compare, Function, MAX};
use jsonq_core::{
    construct, evaluate, Document, Error, EvalError, PathError, Registry, Value, MAX_DEPTH,
};
use std::cmp::Ordering;

fn sample() -> Document {
    construct(r#"{"a": {"b": [1, 2, {"c": "test"}, [11, 12]]}}"#).unwrap()
}

fn eval(expr: &str) -> Result<Value, Error> {
    sample().evaluate(expr)
}

fn int(n: i64) -> Value {
    Value::Integer(n)
}

// ============================================================================
// Paths and literals
// ============================================================================

#[test]
fn evaluate_path() {
    assert_eq!(eval("a.b[a.b[1]].c").unwrap(), Value::from("test"));
}

#[test]
fn evaluate_integer_literals() {
    assert_eq!(eval("42").unwrap(), int(42));
    assert_eq!(eval("-7").unwrap(), int(-7));
    assert_eq!(eval("  5  ").unwrap(), int(5));
}

#[test]
fn evaluate_integer_literal_clamps() {
    assert_eq!(eval("123456789012345678901234567890").unwrap(), int(i64::MAX));
}

#[test]
fn evaluate_bare_minus_fails() {
    assert!(matches!(eval("-"), Err(Error::Eval(EvalError::Syntax { .. }))));
    assert!(matches!(
        eval("max(-, 1)"),
        Err(Error::Eval(EvalError::Syntax { .. }))
    ));
}

#[test]
fn evaluate_empty_expression_fails() {
    assert_eq!(eval(""), Err(Error::Eval(EvalError::UnexpectedEnd)));
    assert_eq!(eval("   "), Err(Error::Eval(EvalError::UnexpectedEnd)));
}

#[test]
fn evaluate_invalid_leading_character_fails() {
    assert!(matches!(
        eval("$.a"),
        Err(Error::Eval(EvalError::Syntax { offset: 0, .. }))
    ));
}

// ============================================================================
// size
// ============================================================================

#[test]
fn size_of_object_counts_entries() {
    assert_eq!(eval("size(a)").unwrap(), int(1));
}

#[test]
fn size_of_array_counts_elements() {
    assert_eq!(eval("size(a.b)").unwrap(), int(4));
}

#[test]
fn size_of_string_counts_characters() {
    assert_eq!(eval("size(a.b[2].c)").unwrap(), int(4));
    let doc = construct(r#"{"s": "café"}"#).unwrap();
    assert_eq!(doc.evaluate("size(s)").unwrap(), int(4));
}

#[test]
fn size_of_integer_is_unsupported() {
    assert_eq!(
        eval("size(a.b[0])"),
        Err(Error::Eval(EvalError::UnsupportedType {
            function: "size",
            found: "integer"
        }))
    );
}

#[test]
fn size_requires_exactly_one_argument() {
    let err = eval("size(a, a)").unwrap_err();
    assert_eq!(err.to_string(), "evaluation error: size requires exactly one argument");
    assert!(matches!(eval("size()"), Err(Error::Eval(EvalError::Arity { .. }))));
}

// ============================================================================
// min / max
// ============================================================================

#[test]
fn max_and_min_compose_with_size_and_paths() {
    assert_eq!(eval("max(size(a.b[a.b[1]].c), 1)").unwrap(), int(4));
    assert_eq!(eval("min(size(a.b[a.b[1]].c), 1)").unwrap(), int(1));
    assert_eq!(eval("max(size(a.b[a.b[1]].c), 7)").unwrap(), int(7));
}

#[test]
fn min_and_max_single_argument() {
    assert_eq!(eval("min(3)").unwrap(), int(3));
    assert_eq!(eval("max(a.b[2].c)").unwrap(), Value::from("test"));
}

#[test]
fn min_and_max_require_an_argument() {
    for expr in ["min()", "max()", "max( )"] {
        let err = eval(expr).unwrap_err();
        assert!(matches!(err, Error::Eval(EvalError::Arity { .. })), "{expr}");
        assert!(
            err.to_string().contains("requires at least one argument"),
            "{expr}: {err}"
        );
    }
}

#[test]
fn max_ranks_types() {
    // integer < string < array < object
    assert_eq!(eval("max(100, a.b[2].c)").unwrap(), Value::from("test"));
    assert_eq!(eval("max(a.b[2].c, a.b[3])").unwrap(), eval("a.b[3]").unwrap());
    assert_eq!(eval("max(a.b, a)").unwrap(), eval("a").unwrap());
    assert_eq!(eval("min(a, a.b, a.b[2].c, 100)").unwrap(), int(100));
}

#[test]
fn max_compares_within_type() {
    let doc = construct(r#"{"s": ["pear", "apple", "zoo"], "l": [[1], [1, 2, 3], [4, 5]]}"#).unwrap();
    assert_eq!(doc.evaluate("max(s[0], s[1], s[2])").unwrap(), Value::from("zoo"));
    assert_eq!(doc.evaluate("min(s[0], s[1], s[2])").unwrap(), Value::from("apple"));
    assert_eq!(doc.evaluate("max(l[0], l[1], l[2])").unwrap(), doc.evaluate("l[1]").unwrap());
    assert_eq!(doc.evaluate("min(-5, 3, -9)").unwrap(), int(-9));
}

#[test]
fn ties_keep_first_argument() {
    let doc = construct(r#"{"x": [1, 2], "y": [3, 4], "p": {"k": 1}, "q": {"m": 2}}"#).unwrap();
    assert_eq!(doc.evaluate("max(x, y)").unwrap(), doc.evaluate("x").unwrap());
    assert_eq!(doc.evaluate("min(y, x)").unwrap(), doc.evaluate("y").unwrap());
    assert_eq!(doc.evaluate("max(q, p)").unwrap(), doc.evaluate("q").unwrap());
}

#[test]
fn compare_is_a_total_order_on_ranks() {
    assert_eq!(compare(&int(9), &Value::from("")), Ordering::Less);
    assert_eq!(compare(&Value::from("b"), &Value::from("a")), Ordering::Greater);
    assert_eq!(
        compare(&Value::Array(vec![int(1)]), &Value::Array(vec![int(2)])),
        Ordering::Equal
    );
}

#[test]
fn nested_calls_compose() {
    assert_eq!(eval("max(min(size(a.b), 2), min(10, size(a.b[3])))").unwrap(), int(2));
    assert_eq!(eval("size( a.b )").unwrap(), int(4));
    assert_eq!(eval("max (1, 2)").unwrap(), int(2));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unknown_function_fails() {
    assert_eq!(
        eval("sum(1, 2)"),
        Err(Error::Eval(EvalError::UnknownFunction("sum".to_string())))
    );
}

#[test]
fn argument_errors_win_over_unknown_function() {
    assert!(matches!(
        eval("sum(a.missing)"),
        Err(Error::Path(PathError::KeyNotFound { .. }))
    ));
}

#[test]
fn missing_key_is_a_path_error() {
    assert_eq!(
        eval("a.nope"),
        Err(Error::Path(PathError::KeyNotFound {
            key: "nope".to_string()
        }))
    );
    assert!(matches!(
        eval("size(a.b[9])"),
        Err(Error::Path(PathError::IndexOutOfBounds { index: 9 }))
    ));
}

#[test]
fn trailing_input_is_an_eval_error() {
    // The path prefix resolves, but the leftover text is rejected.
    assert_eq!(
        eval("a.b x"),
        Err(Error::Eval(EvalError::TrailingInput { offset: 4 }))
    );
    assert!(matches!(
        eval("size(a) )"),
        Err(Error::Eval(EvalError::TrailingInput { .. }))
    ));
    assert!(matches!(
        eval("1 2"),
        Err(Error::Eval(EvalError::TrailingInput { .. }))
    ));
}

#[test]
fn trailing_whitespace_is_allowed() {
    assert_eq!(eval("a.b[0] \n").unwrap(), int(1));
}

#[test]
fn malformed_calls_fail() {
    for expr in ["max(1", "max(1,", "max(1 2)", "max(1,)", "max(,1)"] {
        assert!(
            matches!(eval(expr), Err(Error::Eval(_))),
            "expected eval error for {expr:?}, got {:?}",
            eval(expr)
        );
    }
}

#[test]
fn malformed_paths_are_expression_syntax_errors() {
    assert_eq!(
        eval("a."),
        Err(Error::Eval(EvalError::Syntax {
            offset: 2,
            message: "expected identifier after '.'".to_string()
        }))
    );
    for expr in ["a[", "a.b[1", "size(a.)", "size(a.b[)", r#"a["\q"]"#] {
        assert!(
            matches!(eval(expr), Err(Error::Eval(EvalError::Syntax { .. }))),
            "expected syntax error for {expr:?}, got {:?}",
            eval(expr)
        );
    }
}

#[test]
fn navigation_inside_expressions_stays_a_path_error() {
    assert!(matches!(
        eval("size(a.b[a.b[9]])"),
        Err(Error::Path(PathError::IndexOutOfBounds { index: 9 }))
    ));
    assert!(matches!(
        eval("a.b[a]"),
        Err(Error::Path(PathError::InvalidIndexType { found: "object" }))
    ));
}

#[test]
fn document_get_keeps_path_syntax_errors() {
    assert!(matches!(sample().get("a."), Err(PathError::Syntax { offset: 2, .. })));
}

// ============================================================================
// Registry
// ============================================================================

fn first(args: &[Value]) -> Result<Value, EvalError> {
    Ok(args[0].clone())
}

#[test]
fn custom_functions_can_be_registered() {
    let mut registry = Registry::builtins();
    registry.register(Function {
        name: "first",
        min_args: 1,
        max_args: Some(3),
        eval: first,
    });

    let doc = sample();
    assert_eq!(
        doc.evaluate_with("first(a.b[2].c, 1)", &registry).unwrap(),
        Value::from("test")
    );
    assert_eq!(doc.evaluate_with("size(a.b)", &registry).unwrap(), int(4));

    let err = doc.evaluate_with("first()", &registry).unwrap_err();
    assert_eq!(
        err.to_string(),
        "evaluation error: first requires between 1 and 3 arguments"
    );

    // The shared table is untouched.
    assert!(matches!(
        doc.evaluate("first(1)"),
        Err(Error::Eval(EvalError::UnknownFunction(_)))
    ));
}

#[test]
fn empty_registry_knows_no_functions() {
    let doc = sample();
    assert!(matches!(
        doc.evaluate_with("size(a)", &Registry::empty()),
        Err(Error::Eval(EvalError::UnknownFunction(_)))
    ));
    // Paths still work without any functions.
    assert_eq!(doc.evaluate_with("a.b[1]", &Registry::empty()).unwrap(), int(2));
}

#[test]
fn register_replaces_existing_entry() {
    let mut registry = Registry::builtins();
    let previous = registry.register(Function { name: "max", ..MAX });
    assert!(previous.is_some());
    assert_eq!(registry.names(), ["max", "min", "size"]);
}

// ============================================================================
// Document API
// ============================================================================

#[test]
fn free_functions_match_document_methods() {
    let doc = sample();
    assert_eq!(evaluate(&doc, "size(a.b)").unwrap(), doc.evaluate("size(a.b)").unwrap());
    assert_eq!(doc.get("a.b[1]").unwrap(), &int(2));
}

#[test]
fn document_from_str() {
    let doc: Document = "[1, 2]".parse().unwrap();
    assert_eq!(doc.root(), &Value::Array(vec![int(1), int(2)]));
    assert!("[1,".parse::<Document>().is_err());
}

#[test]
fn document_is_queried_concurrently() {
    let doc = sample();
    let expressions = [
        ("size(a.b)", int(4)),
        ("max(size(a.b[a.b[1]].c), 7)", int(7)),
        ("a.b[3][0]", int(11)),
        ("min(a.b[0], a.b[1])", int(1)),
    ];

    std::thread::scope(|scope| {
        for (expr, expected) in &expressions {
            let doc = &doc;
            scope.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(&doc.evaluate(expr).unwrap(), expected);
                }
            });
        }
    });
}

#[test]
fn document_hands_back_its_root() {
    let doc = sample();
    let root = doc.clone().into_root();
    assert_eq!(&root, doc.root());
    assert_eq!(Document::from_value(root), doc);
}

// ============================================================================
// Nesting depth
// ============================================================================

fn nested_calls(depth: usize) -> String {
    "max(".repeat(depth) + "1" + &")".repeat(depth)
}

#[test]
fn nested_calls_at_limit_evaluate() {
    assert_eq!(eval(&nested_calls(MAX_DEPTH)).unwrap(), int(1));
}

#[test]
fn nested_calls_past_limit_fail() {
    assert_eq!(
        eval(&nested_calls(MAX_DEPTH + 1)),
        Err(Error::Eval(EvalError::NestingTooDeep {
            offset: 4 * MAX_DEPTH
        }))
    );
    assert!(matches!(
        eval(&nested_calls(5000)),
        Err(Error::Eval(EvalError::NestingTooDeep { .. }))
    ));
}

#[test]
fn deep_computed_brackets_in_expression_fail() {
    let doc = construct(r#"{"a": [0]}"#).unwrap();
    let expr = "size(".to_string() + &"a[".repeat(1000) + "0" + &"]".repeat(1000) + ")";
    assert!(matches!(
        doc.evaluate(&expr),
        Err(Error::Eval(EvalError::NestingTooDeep { .. }))
    ));
}

//! Integration tests for the `jsonq` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to run the actual binary
//! against fixture files and check stdout, stderr and the exit status.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

/// Helper: path to the malformed.json fixture.
fn malformed_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/malformed.json")
}

fn jsonq() -> Command {
    Command::cargo_bin("jsonq").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Successful queries
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn computed_path_prints_string() {
    jsonq()
        .args([sample_json_path(), "a.b[a.b[1]].c"])
        .assert()
        .success()
        .stdout("\"test\"\n");
}

#[test]
fn size_and_max_print_integers() {
    jsonq()
        .args([sample_json_path(), "max(size(a.b[a.b[1]].c), 1)"])
        .assert()
        .success()
        .stdout("4\n");

    jsonq()
        .args([sample_json_path(), "max(size(a.b[a.b[1]].c), 7)"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn containers_print_in_canonical_form() {
    jsonq()
        .args([sample_json_path(), "a"])
        .assert()
        .success()
        .stdout("{\"b\": [1, 2, {\"c\": \"test\"}, [11, 12]]}\n");
}

#[test]
fn literal_expression_ignores_document() {
    jsonq()
        .args([sample_json_path(), "-12"])
        .assert()
        .success()
        .stdout("-12\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_file_fails() {
    jsonq()
        .args(["/nonexistent/path/to/file.json", "a"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_json_fails() {
    jsonq()
        .args([malformed_json_path(), "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON"))
        .stderr(predicate::str::contains("unexpected character '}'"));
}

#[test]
fn missing_key_fails() {
    jsonq()
        .args([sample_json_path(), "a.x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to evaluate expression: a.x"))
        .stderr(predicate::str::contains("path error"));
}

#[test]
fn out_of_range_index_fails() {
    jsonq()
        .args([sample_json_path(), "a.b[10]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path error"));
}

#[test]
fn unknown_function_fails() {
    jsonq()
        .args([sample_json_path(), "sum(1, 2)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sum"));
}

#[test]
fn size_of_integer_fails() {
    jsonq()
        .args([sample_json_path(), "size(a.b[0])"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("evaluation error"));
}

#[test]
fn malformed_path_is_reported_as_syntax_error() {
    jsonq()
        .args([sample_json_path(), "a.b["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("evaluation error: syntax error"));
}

#[test]
fn trailing_input_fails() {
    jsonq()
        .args([sample_json_path(), "a.b extra"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_arguments_fail() {
    jsonq().assert().failure().stderr(predicate::str::contains("Usage"));

    jsonq()
        .arg(sample_json_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("EXPRESSION"));
}

//! Integration tests for the `dynjson` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the fmt, get,
//! and check subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, and error reporting.

// `Command::cargo_bin` is deprecated in recent assert_cmd releases; keep
// using it until we migrate to `cargo_bin_cmd!`.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn dynjson() -> Command {
    Command::cargo_bin("dynjson").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// fmt subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fmt_pretty_prints_stdin() {
    dynjson()
        .arg("fmt")
        .write_stdin(r#"{"name":"Alice"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Alice\""));
}

#[test]
fn fmt_compact_strips_whitespace() {
    dynjson()
        .args(["fmt", "--compact"])
        .write_stdin("{\n  \"a\": [1, 2]\n}")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a":[1,2]}"#));
}

#[test]
fn fmt_strips_comments() {
    dynjson()
        .args(["fmt", "--compact"])
        .write_stdin("// note\n{\"a\": 1 /* inline */}")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a":1}"#))
        .stdout(predicate::str::contains("//").not());
}

#[test]
fn fmt_custom_indent() {
    dynjson()
        .args(["fmt", "--indent", "\t"])
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\t\"a\": 1"));
}

#[test]
fn fmt_file_to_file() {
    let out = std::env::temp_dir().join("dynjson-fmt-out.json");
    let _ = std::fs::remove_file(&out);

    dynjson()
        .args(["fmt", "--compact", "-i", sample_json_path()])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"port\":8080"));
    let _ = std::fs::remove_file(&out);
}

#[test]
fn fmt_rejects_invalid_input() {
    dynjson()
        .arg("fmt")
        .write_stdin("{bad}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line(1)"));
}

// ─────────────────────────────────────────────────────────────────────────────
// get subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_nested_path() {
    dynjson()
        .args(["get", "server.listen.port", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("8080"));
}

#[test]
fn get_object_prints_serialized_subtree() {
    dynjson()
        .args(["get", "server.listen", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\":8080"));
}

#[test]
fn get_missing_path_fails() {
    dynjson()
        .args(["get", "server.missing", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path not found"));
}

#[test]
fn get_custom_separator() {
    dynjson()
        .args(["get", "server/workers", "--separator", "/"])
        .write_stdin(r#"{"server":{"workers":4}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("4"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_accepts_valid_document() {
    dynjson()
        .args(["check", "-i", sample_json_path()])
        .assert()
        .success();
}

#[test]
fn check_reports_position_on_failure() {
    dynjson()
        .arg("check")
        .write_stdin("{\n  \"a\": x}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line(2), col(8)"));
}

#[test]
fn check_rejects_empty_input() {
    dynjson().arg("check").write_stdin("").assert().failure();
}

//! Integration tests for the signup form CLI
//!
//! Runs full command lines against schema and event files on disk.

use clap::Parser;
use signup_form_cli::cli::run;
use signup_form_cli::{ExitCode, FormCli};
use std::io::Write;
use tempfile::NamedTempFile;

fn file_with(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn run_args(args: &[&str]) -> (anyhow::Result<ExitCode>, String) {
    let cli = FormCli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let result = run(cli, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_check_valid_form() {
    let (result, out) = run_args(&[
        "signup-form",
        "check",
        "--set",
        "email=a@b.com",
        "--set",
        "password=Abcdefg1",
        "--format",
        "json",
    ]);
    assert_eq!(result.unwrap(), ExitCode::Success);

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["form_valid"], true);
    assert_eq!(json["snapshot"]["fields"][1]["touched"], true);
}

#[test]
fn test_check_untouched_keeps_neutral_state() {
    let (result, out) = run_args(&[
        "signup-form",
        "check",
        "--untouched",
        "--set",
        "email=nope",
        "--format",
        "json",
    ]);
    assert_eq!(result.unwrap(), ExitCode::FormInvalid);

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let email = &json["view"]["fields"][0];
    assert_eq!(email["state"], "neutral");
    assert!(email.get("message").is_none());
}

#[test]
fn test_unknown_field_is_invalid_input() {
    let (result, _) = run_args(&["signup-form", "check", "--set", "phone=123"]);
    let err = result.unwrap_err();
    assert_eq!(ExitCode::from_error(&err), ExitCode::InvalidInput);
}

#[test]
fn test_replay_events_file() {
    let events = file_with(
        ".json",
        r#"[
            {"type": "change", "field": "password", "value": "Abc defg1"},
            {"type": "blur", "field": "password"},
            {"type": "change", "field": "password", "value": "Abcdefg1"}
        ]"#,
    );
    let path = events.path().to_str().unwrap();

    let (result, out) = run_args(&["signup-form", "replay", "--events", path, "--format", "json"]);
    assert_eq!(result.unwrap(), ExitCode::FormInvalid);

    let steps: serde_json::Value = serde_json::from_str(&out).unwrap();
    let steps = steps.as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["snapshot"]["fields"][1]["rule_results"][3]["passed"], false);
    assert_eq!(steps[2]["snapshot"]["fields"][1]["valid"], true);
    assert_eq!(steps[2]["snapshot"]["fields"][1]["touched"], true);
}

#[test]
fn test_custom_schema_file() {
    let schema = file_with(
        ".toml",
        r#"
[[rule_sets]]
name = "username"
rules = [
    { id = "required", check = { kind = "required" }, message = "Username is required" },
    { id = "no_spaces", check = { kind = "no_whitespace" }, message = "No spaces allowed" },
]

[[fields]]
id = "username"
rule_set = "username"
"#,
    );
    let path = schema.path().to_str().unwrap();

    let (result, out) = run_args(&["signup-form", "--schema", path, "rules", "--format", "json"]);
    assert_eq!(result.unwrap(), ExitCode::Success);
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);

    let (result, _) = run_args(&["signup-form", "--schema", path, "check", "--set", "username=ada"]);
    assert_eq!(result.unwrap(), ExitCode::Success);
}

#[test]
fn test_broken_schema_is_schema_error() {
    let schema = file_with(
        ".yaml",
        r#"
rule_sets: []
fields:
  - id: email
    rule_set: email
"#,
    );
    let path = schema.path().to_str().unwrap();

    let (result, _) = run_args(&["signup-form", "--schema", path, "rules"]);
    let err = result.unwrap_err();
    assert_eq!(ExitCode::from_error(&err), ExitCode::SchemaError);
}

#[test]
fn test_missing_schema_is_file_error() {
    let (result, _) = run_args(&["signup-form", "--schema", "/nonexistent/form.toml", "rules"]);
    let err = result.unwrap_err();
    assert_eq!(ExitCode::from_error(&err), ExitCode::FileError);
}

#[test]
fn test_submit_valid_form() {
    let (result, out) = run_args(&[
        "signup-form",
        "submit",
        "-s",
        "email=a@b.com",
        "-s",
        "password=Abcdefg1",
        "--format",
        "json",
    ]);
    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(out.contains("submitted"));
}

//! End-to-end tests for the `burndown` binary.
//!
//! Each test runs the binary as a subprocess with the runner environment
//! scrubbed, so nothing from the host workflow leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::NamedTempFile;

const INPUT_VARS: &[&str] = &[
    "INPUT_GITHUB-TOKEN",
    "INPUT_LOGIN-NAME",
    "INPUT_PROJECT-NUMBER",
    "INPUT_POINT-FIELD-NAME",
    "INPUT_ITERATION-FIELD-NAME",
    "INPUT_STATUS-FIELD-NAME",
    "INPUT_STATUS-COMPLETED-VALUE",
    "INPUT_GROUPING-FIELD-NAME",
];

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

fn burndown() -> Command {
    let mut cmd = Command::cargo_bin("burndown").expect("burndown binary must exist");
    for var in INPUT_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("GITHUB_OUTPUT")
        .env_remove("GITHUB_ACTIONS")
        .env_remove("GITHUB_GRAPHQL_URL")
        .env("RUST_LOG", "error");
    cmd
}

/// `burndown run` with every input supplied through the environment.
fn run_with_inputs() -> Command {
    let mut cmd = burndown();
    cmd.arg("run")
        .env("INPUT_GITHUB-TOKEN", "dummy")
        .env("INPUT_LOGIN-NAME", "example-org")
        .env("INPUT_PROJECT-NUMBER", "1")
        .env("INPUT_POINT-FIELD-NAME", "Point")
        .env("INPUT_ITERATION-FIELD-NAME", "Sprint")
        .env("INPUT_STATUS-FIELD-NAME", "Status")
        .env("INPUT_STATUS-COMPLETED-VALUE", "Done");
    cmd
}

fn output_file_contents(file: &NamedTempFile) -> String {
    std::fs::read_to_string(file.path()).expect("output file should be readable")
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn test_missing_token_fails_with_input_exit_code() {
    burndown()
        .args(["run", "--login-name", "example-org", "--project-number", "1"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "Input required and not supplied: github-token",
        ))
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn test_invalid_project_number_writes_no_outputs() {
    let output = NamedTempFile::new().unwrap();

    run_with_inputs()
        .env("INPUT_PROJECT-NUMBER", "abc")
        .env("GITHUB_OUTPUT", output.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "project-number must be a positive integer",
        ));

    assert_eq!(output_file_contents(&output), "");
}

#[test]
fn test_negative_project_number_is_rejected() {
    run_with_inputs()
        .env("INPUT_PROJECT-NUMBER", "-1")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "project-number must be a positive integer",
        ));
}

#[test]
fn test_flags_override_environment_inputs() {
    run_with_inputs()
        .args(["--project-number", "x1"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("project-number"));
}

#[test]
fn test_failure_is_reported_as_workflow_error_under_actions() {
    burndown()
        .arg("run")
        .env("GITHUB_ACTIONS", "true")
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::starts_with(
            "::error::Input required and not supplied: github-token",
        ));
}

#[test]
fn test_json_error_output() {
    let output = burndown().args(["run", "--json"]).output().unwrap();

    assert_eq!(output.status.code(), Some(4));
    let json: Value = serde_json::from_slice(&output.stderr).expect("stderr should be JSON");
    assert_eq!(json["error"]["code"], "MISSING_INPUT");
    assert_eq!(json["error"]["exit_code"], 4);
    assert!(json["error"]["hint"].as_str().unwrap().contains("--github-token"));
}

#[test]
fn test_github_target_requires_output_file() {
    run_with_inputs()
        .args(["--output", "github"])
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains("GITHUB_OUTPUT is not set"));
}

#[test]
fn test_unreachable_endpoint_fails_without_outputs() {
    let output = NamedTempFile::new().unwrap();

    run_with_inputs()
        .args(["--graphql-url", "http://127.0.0.1:9/graphql", "--timeout-secs", "5"])
        .env("GITHUB_OUTPUT", output.path())
        .assert()
        .failure()
        .code(6);

    assert_eq!(output_file_contents(&output), "");
}

// ---------------------------------------------------------------------------
// business-days
// ---------------------------------------------------------------------------

#[test]
fn test_business_days_counts_both_ends() {
    burndown()
        .args(["business-days", "2020-06-01", "2020-06-02"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_business_days_skips_japanese_holidays() {
    burndown()
        .args(["business-days", "2024-04-29", "2024-05-06"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_business_days_json() {
    let output = burndown()
        .args(["business-days", "1999-12-31", "2000-01-06", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["businessDays"], 5);
    assert_eq!(json["start"], "1999-12-31");
    assert_eq!(json["holidays"], serde_json::json!([]));
}

#[test]
fn test_business_days_json_names_skipped_holidays() {
    let output = burndown()
        .args(["business-days", "2024-04-29", "2024-05-06", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["businessDays"], 3);
    assert_eq!(json["holidays"][0]["date"], "2024-04-29");
    assert_eq!(json["holidays"][0]["name"], "Showa Day");
    assert_eq!(json["holidays"].as_array().unwrap().len(), 3);
}

#[test]
fn test_business_days_rejects_bad_date() {
    burndown()
        .args(["business-days", "2020-13-01", "2020-06-02"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// version / completions
// ---------------------------------------------------------------------------

#[test]
fn test_version() {
    burndown()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("burndown "));
}

#[test]
fn test_completions() {
    burndown()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("burndown"));
}

//! CLI integration tests
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("tianqi").unwrap()
}

fn fixture(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .args(["101010100", "--from-file", &fixture("city_page.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""weather":"#));
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(fixture("city_page.html")).unwrap();
    cmd()
        .args(["101010100", "--from-file", "-"])
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("多云转晴"));
}

#[test]
fn test_cli_output_is_valid_json() {
    let output = cmd()
        .args(["101010100", "--from-file", &fixture("city_page.html")])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["weather"].as_array().unwrap().len(), 7);
    assert!(value["life_index"].is_array());
}

#[test]
fn test_cli_no_life_index_is_null() {
    cmd()
        .args(["101190113", "--from-file", &fixture("no_life_index.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""life_index":null"#));
}

#[test]
fn test_cli_broken_page_prints_failure_document() {
    cmd()
        .args(["101010100", "--from-file", &fixture("missing_temperature.html")])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""error":"Fetch Error (city:101010100)""#))
        .stdout(predicate::str::contains("p.tem"));
}

#[test]
fn test_cli_pretty_output() {
    cmd()
        .args(["101010100", "--pretty", "--from-file", &fixture("city_page.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n"));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("forecast.json");

    cmd()
        .args(["101010100", "--from-file", &fixture("city_page.html")])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains(r#""weather":"#));
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .args(["101010100", "--from-file", "nonexistent.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent.html"));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", "101010100", "--from-file", &fixture("city_page.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("tianqi"));
}

#[test]
fn test_cli_missing_city_code() {
    cmd().assert().failure();
}

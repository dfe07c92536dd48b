//! End-to-end CLI tests for the epstein binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// With no arguments at all, the binary prints the banner and exits 0
/// without performing any query.
#[test]
fn test_no_arguments_shows_banner_and_exits_zero() {
    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DOJ Multimedia Search Client"))
        .stdout(predicate::str::contains("epstein --help"))
        // No query means no summary.
        .stdout(predicate::str::contains("SUMMARY").not());
}

/// --help displays usage information and exits with code 0.
#[test]
fn test_help_displays_usage() {
    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search query"))
        .stdout(predicate::str::contains("--no-save"));
}

/// --version displays version and exits with code 0.
#[test]
fn test_version_displays_version() {
    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("epstein"));
}

/// Invalid flags cause non-zero exit.
#[test]
fn test_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Malformed numeric flag values are reported with non-zero exit.
#[test]
fn test_malformed_limit_returns_error() {
    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.args(["--limit", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_negative_delay_returns_error() {
    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.args(["--delay", "-0.5"]).assert().failure();
}

fn two_hit_body() -> serde_json::Value {
    json!({
        "hits": {
            "hits": [
                {"_source": {
                    "ORIGIN_FILE_NAME": "filing.pdf",
                    "ORIGIN_FILE_URI": "https://files.example/filing.pdf",
                    "documentId": "doc-1",
                    "fileSize": 2048,
                    "totalWords": 100,
                    "startPage": 1,
                    "endPage": 2,
                    "isChunked": false,
                    "indexedAt": "2024-01-01T00:00:00Z",
                }},
                {"_source": {
                    "ORIGIN_FILE_NAME": "exhibit a.pdf",
                    "ORIGIN_FILE_URI": "https://files.example/exhibit a.pdf",
                }},
            ],
            "total": {"value": 2},
        }
    })
}

/// A full run against a mock endpoint: summary printed, three files written.
#[tokio::test(flavor = "multi_thread")]
async fn test_full_run_writes_exports_and_summary() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("keys", "filing"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_hit_body()))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");

    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.args([
        "--search",
        "filing",
        "--base-url",
        &mock_server.uri(),
        "--delay",
        "0",
        "--output-path",
        output_dir.to_str().unwrap(),
        "--quiet",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("SUMMARY: Found 2 documents"))
    .stdout(predicate::str::contains("filing.pdf"))
    .stdout(predicate::str::contains(
        "https://files.example/exhibit%20a.pdf",
    ));

    let entries: Vec<_> = std::fs::read_dir(&output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 3, "expected 3 export files, got: {entries:?}");
    assert!(entries.iter().any(|name| name.ends_with(".json")));
    assert!(entries.iter().any(|name| name.ends_with(".csv")));
    assert!(entries.iter().any(|name| name.ends_with("_urls.txt")));
}

/// --no-save prints the summary without writing any files.
#[tokio::test(flavor = "multi_thread")]
async fn test_no_save_skips_export() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_hit_body()))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("never_created");

    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.args([
        "--base-url",
        &mock_server.uri(),
        "--delay",
        "0",
        "--no-save",
        "--output-path",
        output_dir.to_str().unwrap(),
        "--quiet",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("SUMMARY: Found 2 documents"))
    .stdout(predicate::str::contains("Saved JSON").not());

    assert!(!output_dir.exists());
}

/// An unreachable endpoint degrades to "no documents" with exit 0.
#[test]
fn test_unreachable_endpoint_reports_no_documents() {
    let mut cmd = Command::cargo_bin("epstein").unwrap();
    cmd.args(["--base-url", "http://127.0.0.1:1/", "--delay", "0", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY: Found 0 documents"))
        .stdout(predicate::str::contains("No documents found."));
}

use assert_cmd::Command;
use juridraft_core::export::read_paragraphs;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn juridraft(workspace: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("juridraft").unwrap();
    cmd.current_dir(workspace.path())
        .env("HOME", workspace.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_creates_config_once() {
    let workspace = TempDir::new().unwrap();

    juridraft(&workspace)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"));
    assert!(workspace.path().join("juridraft.toml").exists());

    juridraft(&workspace)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn missing_api_key_fails_with_hint() {
    let workspace = TempDir::new().unwrap();

    juridraft(&workspace)
        .args(["chat", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn show_reports_missing_document() {
    let workspace = TempDir::new().unwrap();

    juridraft(&workspace)
        .args(["show", "outputs/none.docx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read document"));
}

#[tokio::test(flavor = "multi_thread")]
async fn draft_prints_and_exports_cleaned_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "**MOTION ON NOTICE**\n\n\nGranted."}]}}]
        })))
        .mount(&server)
        .await;

    let workspace = TempDir::new().unwrap();
    fs::write(
        workspace.path().join("juridraft.toml"),
        format!("[gemini]\nbase_url = \"{}/v1beta\"\n", server.uri()),
    )
    .unwrap();

    juridraft(&workspace)
        .env("GEMINI_API_KEY", "test-key")
        .args(["draft", "-t", "Motion", "-f", "Rent unpaid", "-p", "Ade v. Bello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MOTION ON NOTICE\n\nGranted."))
        .stdout(predicate::str::contains("court_process_draft.docx"));

    let exported = workspace.path().join("outputs").join("court_process_draft.docx");
    assert_eq!(
        read_paragraphs(&exported).unwrap(),
        vec!["MOTION ON NOTICE\n\nGranted.".to_string()]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_research_query_reaches_the_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(body_string_contains("query:\\n\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Please state the research question."}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workspace = TempDir::new().unwrap();
    fs::write(
        workspace.path().join("juridraft.toml"),
        format!("[gemini]\nbase_url = \"{}/v1beta\"\n", server.uri()),
    )
    .unwrap();

    juridraft(&workspace)
        .env("GEMINI_API_KEY", "test-key")
        .args(["research", "", "--no-export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please state the research question."));

    assert!(!workspace.path().join("outputs").exists());
}

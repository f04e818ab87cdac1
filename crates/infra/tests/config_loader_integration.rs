//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! handing it to the client.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use std::time::Duration;

use serde_json::json;
use squarely_domain::{DomainError, Environment};
use squarely_infra::{config, HttpClient, SquareClient};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "square.json",
        r#"{
            "access_token": "EAAA-json-token",
            "environment": "production",
            "api_version": "2023-12-13",
            "timeout_secs": 10
        }"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load config from JSON file");

    assert_eq!(config.access_token.expose(), "EAAA-json-token");
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.api_version, "2023-12-13");
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert_eq!(config.resolved_base_url(), "https://connect.squareup.com");
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "square.toml",
        r#"
access_token = "EAAA-toml-token"
base_url = "http://127.0.0.1:9000"
"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load config from TOML file");

    assert_eq!(config.access_token.expose(), "EAAA-toml-token");
    assert_eq!(config.environment, Environment::Sandbox);
    assert_eq!(config.resolved_base_url(), "http://127.0.0.1:9000");
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn test_blank_token_in_file_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "config.json", r#"{"access_token": "   "}"#);

    let result = config::load_from_file(Some(path));
    assert!(matches!(result, Err(DomainError::Config(_))));
}

#[test]
fn test_unknown_environment_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path =
        write_config(&dir, "config.toml", "access_token = \"t\"\nenvironment = \"staging\"\n");

    let result = config::load_from_file(Some(path));
    assert!(matches!(result, Err(DomainError::Config(_))));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.toml");

    match config::load_from_file(Some(missing)) {
        Err(DomainError::Config(message)) => assert!(message.contains("absent.toml")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_loaded_config_drives_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/customers/groups"))
        .and(header("Authorization", "Bearer EAAA-file-token"))
        .and(header("Square-Version", "2024-02-22"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"groups": [{"id": "G1", "name": "Regulars"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let contents = format!(
        "access_token = \"EAAA-file-token\"\napi_version = \"2024-02-22\"\nbase_url = \"{}\"\n",
        server.uri()
    );
    let path = write_config(&dir, "square.toml", &contents);
    let config = config::load_from_file(Some(path)).expect("config should load");

    support::init_tracing();
    let client = SquareClient::builder()
        .config(config)
        .http_client(HttpClient::builder().no_proxy().build().expect("http client"))
        .build()
        .expect("client should build");

    let page = client.groups().list(None).await.expect("groups should list");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Regulars");
}

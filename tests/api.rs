//! Endpoint contract tests.

use chrono::DateTime;
use https_demo::AppConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn health_returns_ok_with_parseable_timestamp() {
    let app = common::spawn_default_app().await;

    let response = reqwest::get(app.url("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["https"], false);
    assert!(
        DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok(),
        "timestamp should be RFC3339: {body}"
    );

    app.stop();
}

#[tokio::test]
async fn health_reports_configured_environment() {
    let mut config = AppConfig::default();
    config.environment = "production".to_string();
    let app = common::spawn_app(config).await;

    let body: Value = reqwest::get(app.url("/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["environment"], "production");
}

#[tokio::test]
async fn health_trusts_forwarded_proto_for_https_flag() {
    let app = common::spawn_default_app().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(app.url("/api/health"))
        .header("x-forwarded-proto", "https")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["https"], true);
}

#[tokio::test]
async fn message_returns_fixed_greeting() {
    let app = common::spawn_default_app().await;

    let body: Value = reqwest::get(app.url("/api/message"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Hello from HTTPS Backend!");
    assert_eq!(body["secure"], false);
    assert_eq!(body["protocol"], "http");
}

#[tokio::test]
async fn echo_suffixes_the_message() {
    let app = common::spawn_default_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.url("/api/echo"))
        .json(&json!({ "message": "hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["original"], "hi");
    assert_eq!(body["echoed"], "hi (echoed)");
    assert!(DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn echo_without_message_returns_placeholder() {
    let app = common::spawn_default_app().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(app.url("/api/echo"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["original"], Value::Null);
    assert_eq!(body["echoed"], "No message provided");
}

#[tokio::test]
async fn echo_does_not_trim_whitespace() {
    let app = common::spawn_default_app().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(app.url("/api/echo"))
        .json(&json!({ "message": "  hi  " }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["echoed"], "  hi   (echoed)");
}

#[tokio::test]
async fn echo_rejects_malformed_json() {
    let app = common::spawn_default_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.url("/api/echo"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_path_returns_404_with_fixed_body() {
    let app = common::spawn_default_app().await;

    let response = reqwest::get(app.url("/api/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn index_serves_the_client_view() {
    let app = common::spawn_default_app().await;

    let response = reqwest::get(app.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let page = response.text().await.unwrap();
    assert!(page.contains("HTTPS Fullstack Demo"));

    let js = reqwest::get(app.url("/app.js")).await.unwrap();
    assert_eq!(js.status(), StatusCode::OK);
    assert!(js.text().await.unwrap().contains("/api/echo"));
}

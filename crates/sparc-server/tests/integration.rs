use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use http_body_util::BodyExt;
use sparc_agent::{ContentGenerator, ProviderConfig, ProviderError};
use sparc_core::config::Config;
use sparc_core::types::AiProvider;
use sparc_server::{build_router, AppState};
use tower::ServiceExt;

const BLOG: &str = "Create a simple blog application with user authentication";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn app() -> axum::Router {
    build_router(AppState::new(Config::default(), ProviderConfig::default()).unwrap())
}

fn app_with(config: Config, generator: Arc<dyn ContentGenerator>) -> axum::Router {
    build_router(AppState::with_generator(
        config,
        ProviderConfig::default(),
        generator,
    ))
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a POST request with a raw body via `oneshot` and return (status, parsed JSON body).
async fn post_raw(
    app: axum::Router,
    uri: &str,
    body: Vec<u8>,
) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, serde_json::to_vec(&body).unwrap()).await
}

/// Answers every prompt with one line of notes.
struct Notes;

#[async_trait]
impl ContentGenerator for Notes {
    async fn generate(
        &self,
        _prompt: &str,
        _provider: AiProvider,
    ) -> Result<String, ProviderError> {
        Ok("- integration note".into())
    }
}

// ---------------------------------------------------------------------------
// GET /health, GET /providers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_ok() {
    let (status, json) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn providers_lists_all_three() {
    let (status, json) = get(app(), "/providers").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["openai", "anthropic", "mock"]);
    assert_eq!(json[2]["configured"], true);
    assert_eq!(json[0]["configured"], false);
}

// ---------------------------------------------------------------------------
// POST /generate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_returns_bundle() {
    let (status, json) = post_json(
        app(),
        "/generate",
        serde_json::json!({
            "description": BLOG,
            "framework": "react",
            "includeTests": true,
            "includeDocs": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let files = json["files"].as_array().unwrap();
    assert_eq!(files[0]["name"], "sparc/01-specification.md");
    assert_eq!(files[0]["type"], "documentation");
    assert!(files.iter().any(|f| f["name"] == "src/App.jsx"));
    assert!(files.iter().any(|f| f["name"] == "CONTRIBUTING.md"));
    assert!(json["specification"]
        .as_str()
        .unwrap()
        .starts_with("# Phase 1: Specification - Blog Application"));
    assert!(json["architecture"].as_str().unwrap().contains("## Components"));
    assert!(json["generationTime"].is_u64());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn generate_respects_options() {
    let (status, json) = post_json(
        app(),
        "/generate",
        serde_json::json!({
            "description": BLOG,
            "framework": "vue",
            "includeTests": false,
            "includeDocs": false
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"src/App.vue"));
    assert!(!names.contains(&"README.md"));
    assert!(!names.iter().any(|n| n.starts_with("tests/")));
}

#[tokio::test]
async fn short_description_is_400_with_details() {
    let (status, json) =
        post_json(app(), "/generate", serde_json::json!({"description": "Hi"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid input");
    assert_eq!(json["details"][0], "Input must be at least 10 characters");
}

#[tokio::test]
async fn empty_description_is_400() {
    let (status, json) =
        post_json(app(), "/generate", serde_json::json!({"description": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0], "Input is required");
}

#[tokio::test]
async fn missing_description_is_400() {
    let (status, json) =
        post_json(app(), "/generate", serde_json::json!({"framework": "react"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
    assert!(json["details"].is_array());
}

#[tokio::test]
async fn unknown_framework_is_400() {
    let (status, _) = post_json(
        app(),
        "/generate",
        serde_json::json!({"description": "Create a blog application", "framework": "ember"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (status, json) = post_raw(app(), "/generate", b"{not json".to_vec()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
}

#[tokio::test]
async fn elaboration_appends_notes_when_enabled() {
    let mut config = Config::default();
    config.generation.elaborate = true;
    let (status, json) = post_json(
        app_with(config, Arc::new(Notes)),
        "/generate",
        serde_json::json!({ "description": BLOG }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let spec = json["specification"].as_str().unwrap();
    assert!(spec.ends_with("## Additional Notes\n\n- integration note\n"));
}

#[tokio::test]
async fn elaboration_is_off_by_default() {
    let (_, json) = post_json(
        app_with(Config::default(), Arc::new(Notes)),
        "/generate",
        serde_json::json!({ "description": BLOG }),
    )
    .await;
    assert!(!json["specification"]
        .as_str()
        .unwrap()
        .contains("Additional Notes"));
}

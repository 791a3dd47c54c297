//! Integration tests for the ColorTool Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use colortool::config::Config;
use colortool::models::ContrastMode;
use colortool::web::{create_router, AppState};

fn create_test_app() -> axum::Router {
    create_router(AppState::new(Config::default()))
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_convert_hex() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/convert?input=%23FF0000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["input"], "#FF0000");
    assert_eq!(json["source"], "hex");
    assert_eq!(json["hex"], "#FF0000");
    assert_eq!(json["rgb_text"], "255,0,0");
    assert_eq!(json["hsl_text"], "0,100%,50%");
    assert_eq!(json["hsl"]["h"], 0);
    assert_eq!(json["contrast"]["mode"], "background");
    assert_eq!(json["contrast"]["reference"], "#E8ECF1");
    assert_eq!(json["contrast"]["ratio_text"], "3.37:1");
    assert_eq!(json["contrast"]["level"], "AA-large");
}

#[tokio::test]
async fn test_convert_hsl_text_mode() {
    let app = create_test_app();

    let (status, json) = get_json(
        &app,
        "/api/convert?input=120,100%25,25%25&from=hsl&mode=text",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "hsl");
    assert_eq!(json["hex"], "#008000");
    assert_eq!(json["contrast"]["mode"], "text");
    assert_eq!(json["contrast"]["reference"], "#121318");
}

#[tokio::test]
async fn test_convert_malformed_color_is_bad_request() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/convert?input=xyz").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid color");
    assert!(json["details"].as_str().unwrap().contains("xyz"));
}

#[tokio::test]
async fn test_convert_bad_format_and_mode() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/convert?input=abc&from=cmyk").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid format");

    let (status, json) = get_json(&app, "/api/convert?input=abc&mode=upside").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid mode");
}

#[tokio::test]
async fn test_convert_missing_input() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/convert").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid query");
    assert!(json["details"].as_str().unwrap().contains("input"));
}

#[tokio::test]
async fn test_contrast_missing_color() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/contrast?mode=text").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid query");
    assert!(json["details"].as_str().unwrap().contains("color"));
}

#[tokio::test]
async fn test_contrast_reference_and_against() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/contrast?color=255,255,255&mode=text").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["color"], "#FFFFFF");
    assert_eq!(json["ratio_text"], "18.55:1");
    assert_eq!(json["level"], "AAA");

    let (status, json) = get_json(&app, "/api/contrast?color=fff&against=000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reference"], "#000000");
    assert_eq!(json["ratio"], 21.0);
}

#[tokio::test]
async fn test_contrast_invalid_against() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/contrast?color=fff&against=nope").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid color");
}

#[tokio::test]
async fn test_random_uses_requested_mode() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/random?mode=text").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["hex"].as_str().unwrap().starts_with('#'));
    assert_eq!(json["contrast"]["mode"], "text");
}

#[tokio::test]
async fn test_reference_follows_config() {
    let mut config = Config::default();
    config.contrast.default_mode = ContrastMode::Text;
    let app = create_router(AppState::new(config));

    let (status, json) = get_json(&app, "/api/reference").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["panel"], "#121318");
    assert_eq!(json["ink"], "#E8ECF1");
    assert_eq!(json["default_mode"], "text");
    assert_eq!(json["modes"][0]["mode"], "background");
    assert_eq!(json["modes"][0]["reference"], "#E8ECF1");
    assert_eq!(json["modes"][1]["reference"], "#121318");

    // Default mode applies to requests that name none
    let (_, json) = get_json(&app, "/api/convert?input=fff").await;
    assert_eq!(json["contrast"]["mode"], "text");
}

//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use arena_api::build_router;
use arena_api::state::AppState;
use arena_core::slug::Seed;
use arena_test_support::{FixedSeedSource, test_content_pack};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Seed handed to every minted code: `skill-issue`.
pub const FIXED_SEED: u32 = 1;

/// Build the full app router over the test content pack, minting every
/// code with [`FIXED_SEED`].
pub fn build_test_app() -> Router {
    let seed = Seed::new(FIXED_SEED).expect("seed in range");
    let app_state = AppState::new(test_content_pack(), Arc::new(FixedSeedSource(seed)));
    build_router(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

//! Shared harness for the API integration tests
//!
//! Boots the full router against a throwaway database and speaks HTTP
//! to it in-process.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use banbeis_server::{Config, ServerState};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build the API router on a fresh temp-dir database.
///
/// The seed directory points at a path that does not exist, so every
/// collection starts empty.
pub async fn test_app() -> (TempDir, Router) {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(tmp.path().to_string_lossy().into_owned(), 0);
    config.seed_dir = tmp.path().join("no-seed").to_string_lossy().into_owned();

    let state = ServerState::initialize(&config).await;
    let app = banbeis_server::api::router().with_state(state);
    (tmp, app)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(json) => builder
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a payload and return the created body, asserting 201 + Location
pub async fn create_ok(app: &Router, uri: &str, payload: Value) -> Value {
    let response = send(app, Method::POST, uri, Some(payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key(header::LOCATION));
    body_json(response).await
}

/// Total record count as reported by the listing endpoint
pub async fn total_count(app: &Router, uri: &str) -> u64 {
    let response = send(app, Method::GET, uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    response
        .headers()
        .get("x-total-count")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap()
}

//! Boot against the shipped reference files and read them back over HTTP

use axum::http::{Method, Request, StatusCode};
use axum::body::Body;
use banbeis_server::{Config, ServerState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn shipped_reference_data_is_served_after_boot() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = Config::with_overrides(tmp.path().to_string_lossy().into_owned(), 0);
    config.seed_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data-resource").to_string();

    let state = ServerState::initialize(&config).await;
    let app = banbeis_server::api::router().with_state(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/divisions?size=50&sort=name,asc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-total-count").unwrap(), "8");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let divisions: Value = serde_json::from_slice(&bytes).unwrap();
    let names: Vec<&str> = divisions
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names[0], "Barishal");
    assert!(names.contains(&"Dhaka"));
    assert!(names.contains(&"Sylhet"));

    // Districts reference their division by id string
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/districts/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let district: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(district["name"], "Dhaka");
    assert_eq!(district["division"], "division:⟨3⟩");
}

//! Listing contract — X-Total-Count, Link headers, page windows, sort

mod common;

use axum::http::{Method, StatusCode, header};
use common::{body_json, create_ok, send};
use serde_json::json;

const URL: &str = "/api/divisions";

async fn seed_divisions(app: &axum::Router, count: usize) {
    for i in 0..count {
        create_ok(app, URL, json!({"name": format!("Division {i:02}")})).await;
    }
}

#[tokio::test]
async fn listing_carries_the_pagination_envelope() {
    let (_tmp, app) = common::test_app().await;
    seed_divisions(&app, 25).await;

    let response = send(&app, Method::GET, &format!("{URL}?page=0&size=10"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-total-count").unwrap(), "25");

    let link = response
        .headers()
        .get(header::LINK)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(link.contains(r#"</api/divisions?page=1&size=10>; rel="next""#));
    assert!(link.contains(r#"</api/divisions?page=2&size=10>; rel="last""#));
    assert!(link.contains(r#"</api/divisions?page=0&size=10>; rel="first""#));
    assert!(!link.contains(r#"rel="prev""#));

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn page_windows_slice_the_sorted_sequence() {
    let (_tmp, app) = common::test_app().await;
    seed_divisions(&app, 25).await;

    let response = send(
        &app,
        Method::GET,
        &format!("{URL}?page=2&size=10&sort=name,asc"),
        None,
    )
    .await;
    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    // Last page of 25 records at size 10 holds the final 5
    assert_eq!(names, vec![
        "Division 20",
        "Division 21",
        "Division 22",
        "Division 23",
        "Division 24"
    ]);

    // Descending flips the order
    let response = send(
        &app,
        Method::GET,
        &format!("{URL}?page=0&size=3&sort=name,desc"),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "Division 24");
    assert_eq!(body[2]["name"], "Division 22");
}

#[tokio::test]
async fn count_matches_an_all_covering_page() {
    let (_tmp, app) = common::test_app().await;
    seed_divisions(&app, 7).await;

    let response = send(&app, Method::GET, &format!("{URL}?page=0&size=100"), None).await;
    assert_eq!(response.headers().get("x-total-count").unwrap(), "7");
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn listing_rejects_malformed_sort() {
    let (_tmp, app) = common::test_app().await;

    let response = send(
        &app,
        Method::GET,
        &format!("{URL}?sort=name,sideways"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::GET,
        &format!("{URL}?sort=name;DELETE%20division,asc"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_collection_lists_cleanly() {
    let (_tmp, app) = common::test_app().await;

    let response = send(&app, Method::GET, URL, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-total-count").unwrap(), "0");
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

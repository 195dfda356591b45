//! Merge-patch semantics across entity shapes
//!
//! Presence overwrites — including falsy values — and omission
//! preserves, for booleans, enums, dates and weak references alike.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, create_ok, send};
use serde_json::json;

#[tokio::test]
async fn patch_false_is_present_not_absent() {
    let (_tmp, app) = common::test_app().await;

    let created = create_ok(
        &app,
        "/api/posts",
        json!({
            "post_date": "2022-03-01",
            "title": "Annual sports day",
            "body": "The annual sports day will be held...",
            "publish": true,
            "published_on": "2022-03-01T09:30:00Z"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/posts/{id}"),
        Some(json!({"id": id, "publish": false})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["publish"], false);
    // Everything omitted is untouched
    assert_eq!(patched["title"], "Annual sports day");
    assert_eq!(patched["post_date"], "2022-03-01");
    assert!(patched["published_on"].is_string());
}

#[tokio::test]
async fn patch_empty_string_overwrites() {
    let (_tmp, app) = common::test_app().await;

    let created = create_ok(
        &app,
        "/api/center-images",
        json!({"title": "Main gate", "description": "Front view", "show": true}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/center-images/{id}"),
        Some(json!({"id": id, "description": "", "show": false})),
    )
    .await;
    let patched = body_json(response).await;
    assert_eq!(patched["description"], "");
    assert_eq!(patched["show"], false);
    assert_eq!(patched["title"], "Main gate");
}

#[tokio::test]
async fn patch_enum_values_overwrite() {
    let (_tmp, app) = common::test_app().await;

    let created = create_ok(
        &app,
        "/api/post-comments",
        json!({
            "commented_by": "reader",
            "comment": "Very helpful",
            "comment_type": "INITIAL_COMMENT"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/post-comments/{id}"),
        Some(json!({"id": id, "comment_type": "REPLY"})),
    )
    .await;
    let patched = body_json(response).await;
    assert_eq!(patched["comment_type"], "REPLY");
    assert_eq!(patched["commented_by"], "reader");
}

#[tokio::test]
async fn weak_references_stay_plain_id_strings() {
    let (_tmp, app) = common::test_app().await;

    let division = create_ok(&app, "/api/divisions", json!({"name": "Dhaka"})).await;
    let division_id = division["id"].as_str().unwrap().to_string();

    let center = create_ok(
        &app,
        "/api/centers",
        json!({"name": "Dhanmondi Center", "division": division_id}),
    )
    .await;
    assert_eq!(center["division"], json!(division_id));
    let center_id = center["id"].as_str().unwrap().to_string();

    // Deleting the referenced division does not cascade
    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/divisions/{division_id}"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &format!("/api/centers/{center_id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let center = body_json(response).await;
    // The dangling reference is preserved as-is
    assert_eq!(center["division"], json!(division_id));
}

#[tokio::test]
async fn navigation_parent_is_a_weak_self_reference() {
    let (_tmp, app) = common::test_app().await;

    let root = create_ok(
        &app,
        "/api/navigations",
        json!({"sequence": 1, "route": "/home", "title": "Home"}),
    )
    .await;
    let root_id = root["id"].as_str().unwrap().to_string();

    let child = create_ok(
        &app,
        "/api/navigations",
        json!({"sequence": 2, "route": "/home/centers", "title": "Centers", "parent": root_id}),
    )
    .await;
    assert_eq!(child["parent"], json!(root_id));

    // Re-parenting through a patch
    let other = create_ok(
        &app,
        "/api/navigations",
        json!({"sequence": 3, "route": "/info", "title": "Info"}),
    )
    .await;
    let other_id = other["id"].as_str().unwrap().to_string();
    let child_id = child["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/navigations/{child_id}"),
        Some(json!({"id": child_id, "parent": other_id})),
    )
    .await;
    let patched = body_json(response).await;
    assert_eq!(patched["parent"], json!(other_id));
    assert_eq!(patched["route"], "/home/centers");
}

#[tokio::test]
async fn patch_duty_dates_on_center_employee() {
    let (_tmp, app) = common::test_app().await;

    let created = create_ok(
        &app,
        "/api/center-employees",
        json!({"duty_type": "MAIN", "joining_date": "2021-07-01"}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/center-employees/{id}"),
        Some(json!({"id": id, "duty_type": "ADDITIONAL", "release_date": "2023-12-31"})),
    )
    .await;
    let patched = body_json(response).await;
    assert_eq!(patched["duty_type"], "ADDITIONAL");
    assert_eq!(patched["joining_date"], "2021-07-01");
    assert_eq!(patched["release_date"], "2023-12-31");
}

#[tokio::test]
async fn photo_payloads_round_trip_as_base64() {
    let (_tmp, app) = common::test_app().await;

    let full_name_fields = json!({
        "full_name": "Abdul Karim",
        "bn_full_name": "আব্দুল করিম",
        "mobile": "01711000000",
        "email": "karim@banbeis.gov.bd",
        // "BANBEIS" in base64
        "photo": "QkFOQkVJUw==",
        "photo_content_type": "image/png"
    });
    let created = create_ok(&app, "/api/employees", full_name_fields).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["photo"], "QkFOQkVJUw==");

    // Patching unrelated fields leaves the binary payload alone
    let response = send(
        &app,
        Method::PATCH,
        &format!("/api/employees/{id}"),
        Some(json!({"id": id, "mobile": "01911000000"})),
    )
    .await;
    let patched = body_json(response).await;
    assert_eq!(patched["mobile"], "01911000000");
    assert_eq!(patched["photo"], "QkFOQkVJUw==");
    assert_eq!(patched["photo_content_type"], "image/png");
}

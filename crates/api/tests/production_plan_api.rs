//! HTTP-level tests for `/api/production-plans`.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, get, post_json, register_user, signed_in};
use fertiflow_db::storage::Storage;
use serde_json::{json, Value};

fn plan(name: &str) -> Value {
    json!({
        "planName": name,
        "planYear": 2025,
        "planType": "production",
        "description": "Annual urea production target",
    })
}

#[tokio::test]
async fn test_routes_require_session() {
    let (app, storage) = build_test_app();

    let response = get(&app, "/api/production-plans", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_bytes(response).await.is_empty());

    let response = post_json(&app, "/api/production-plans", plan("Plan A"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert!(storage.get_production_plans().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_applies_defaults_and_creator() {
    let (app, _storage) = build_test_app();
    let (cookie, user_id) = register_user(&app, "planner").await;

    let response = post_json(&app, "/api/production-plans", plan("Plan A"), Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["planName"], "Plan A");
    assert_eq!(json["planYear"], 2025);
    assert_eq!(json["status"], "draft");
    assert_eq!(json["createdBy"], user_id.as_str());
    assert!(json["id"].is_string());
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

#[tokio::test]
async fn test_description_is_optional() {
    let (app, _storage) = build_test_app();
    let cookie = signed_in(&app).await;

    let mut body = plan("Import plan");
    body.as_object_mut().unwrap().remove("description");
    body["status"] = json!("active");
    let response = post_json(&app, "/api/production-plans", body, Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["description"].is_null());
    assert_eq!(json["status"], "active");
}

#[tokio::test]
async fn test_invalid_bodies_are_400() {
    let (app, storage) = build_test_app();
    let cookie = signed_in(&app).await;

    let mut early_year = plan("A");
    early_year["planYear"] = json!(1999);
    let mut late_year = plan("B");
    late_year["planYear"] = json!(2101);
    let mut text_year = plan("C");
    text_year["planYear"] = json!("2025");
    let mut bad_status = plan("D");
    bad_status["status"] = json!("archived");
    let empty_name = plan("");

    for body in [early_year, late_year, text_year, bad_status, empty_name] {
        let response = post_json(&app, "/api/production-plans", body, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid production plan data");
    }

    assert!(storage.get_production_plans().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let (app, _storage) = build_test_app();
    let cookie = signed_in(&app).await;
    for name in ["Plan A", "Plan B", "Plan C"] {
        let response = post_json(&app, "/api/production-plans", plan(name), Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(&app, "/api/production-plans", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let rows = body_json(response).await;
    let names: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["planName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Plan C", "Plan B", "Plan A"]);
}

//! HTTP-level tests for `/api/production-data`.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, get, post_json, signed_in};
use fertiflow_db::storage::Storage;
use serde_json::{json, Value};

fn observation(factory: &str) -> Value {
    json!({
        "factoryName": factory,
        "fertilizerType": "Urea",
        "dailyProduction": 850,
        "targetProduction": "1000.00",
        "efficiencyRate": 85.5,
    })
}

#[tokio::test]
async fn test_routes_require_session() {
    let (app, storage) = build_test_app();

    let response = get(&app, "/api/production-data", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_bytes(response).await.is_empty());

    let response = post_json(&app, "/api/production-data", observation("Jamuna"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert!(storage.get_production_data().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let (app, _storage) = build_test_app();
    let cookie = signed_in(&app).await;

    let response =
        post_json(&app, "/api/production-data", observation("Jamuna"), Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["factoryName"], "Jamuna");
    assert_eq!(json["status"], "operational");
    assert_eq!(json["dailyProduction"], "850.00");
    assert_eq!(json["targetProduction"], "1000.00");
    assert_eq!(json["efficiencyRate"], "85.50");
    assert!(json["productionDate"].is_string());
}

#[tokio::test]
async fn test_efficiency_bounds() {
    let (app, _storage) = build_test_app();
    let cookie = signed_in(&app).await;

    let mut full = observation("Ghorasal");
    full["efficiencyRate"] = json!(100);
    let response = post_json(&app, "/api/production-data", full, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut over = observation("Ghorasal");
    over["efficiencyRate"] = json!(100.01);
    let response = post_json(&app, "/api/production-data", over, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_bodies_are_400() {
    let (app, storage) = build_test_app();
    let cookie = signed_in(&app).await;

    let mut negative = observation("A");
    negative["dailyProduction"] = json!(-1);
    let mut bad_status = observation("B");
    bad_status["status"] = json!("exploded");
    let mut missing_target = observation("C");
    missing_target
        .as_object_mut()
        .unwrap()
        .remove("targetProduction");
    let empty_factory = observation("");

    for body in [negative, bad_status, missing_target, empty_factory] {
        let response = post_json(&app, "/api/production-data", body, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid production data");
    }

    assert!(storage.get_production_data().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let (app, _storage) = build_test_app();
    let cookie = signed_in(&app).await;
    for factory in ["Jamuna", "Ghorasal", "Chittagong"] {
        let mut body = observation(factory);
        body["status"] = json!("maintenance");
        let response = post_json(&app, "/api/production-data", body, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let rows = body_json(get(&app, "/api/production-data", Some(&cookie)).await).await;

    let factories: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["factoryName"].as_str().unwrap())
        .collect();
    assert_eq!(factories, ["Chittagong", "Ghorasal", "Jamuna"]);
    assert!(rows
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["status"] == "maintenance"));
}

//! HTTP API tests driven through the router with `oneshot`.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use route_dashboard::config::WeatherSettings;
use route_dashboard::db::LocalRepository;
use route_dashboard::http::{create_router, AppState};
use route_dashboard::services::WeatherService;

use support::SAMPLE_DOCUMENT;

fn offline_weather() -> WeatherService {
    WeatherService::new(WeatherSettings {
        enabled: false,
        ..Default::default()
    })
}

fn app(repo: LocalRepository) -> Router {
    create_router(AppState::new(Arc::new(repo), offline_weather()))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_dashboard_round_trip_of_sort_state() {
    let repo = LocalRepository::from_json_str(SAMPLE_DOCUMENT).unwrap();

    // first click on "Distancia (km)" sorts ascending
    let (status, body) = get_json(app(repo.clone()), "/v1/dashboard?click=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sort"]["column"], 4);
    assert_eq!(body["sort"]["ascending"], true);
    let distances: Vec<&str> = body["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["distance_km"].as_str().unwrap())
        .collect();
    assert_eq!(distances, ["", "30.50", "61.00", "84.25"]);

    // clicking the same header again flips the direction
    let (_, body) = get_json(
        app(repo),
        "/v1/dashboard?sort=4&ascending=true&click=4",
    )
    .await;
    assert_eq!(body["sort"]["ascending"], false);
    assert_eq!(body["rows"][0]["distance_km"], "84.25");
}

#[tokio::test]
async fn test_dashboard_charts_follow_rows() {
    let repo = LocalRepository::from_json_str(SAMPLE_DOCUMENT).unwrap();
    let (_, body) = get_json(app(repo), "/v1/dashboard?driver=Ana").await;

    assert_eq!(body["charts"]["distance"]["labels"], serde_json::json!(["Ana", "Ana"]));
    assert_eq!(
        body["charts"]["distance"]["series"][0]["values"],
        serde_json::json!([61.0, 30.5])
    );
    assert_eq!(
        body["charts"]["adherence"]["series"][0]["values"],
        serde_json::json!([92.0, 50.0])
    );
}

#[tokio::test]
async fn test_empty_store_serves_empty_dashboard() {
    let (status, body) = get_json(app(LocalRepository::empty()), "/v1/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"], serde_json::json!([]));
    assert_eq!(body["summary"]["average_duration"], "");

    let (_, body) = get_json(app(LocalRepository::empty()), "/health").await;
    assert_eq!(body["data"], "empty");
    assert_eq!(body["record_count"], 0);
}

#[tokio::test]
async fn test_unknown_mode_is_bad_request() {
    let repo = LocalRepository::from_json_str(SAMPLE_DOCUMENT).unwrap();
    let (status, body) = get_json(app(repo), "/v1/dashboard?mode=year").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_weather_disabled_reports_unavailable() {
    let (status, body) = get_json(
        app(LocalRepository::empty()),
        "/v1/weather?lat=40.41&lon=-3.70",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["message"], "No se pudo obtener el clima.");
}

//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{clock, dashboard, drivers, health, weather};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(drivers::LIST_DRIVERS, get(handlers::list_drivers))
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(clock::GET_CLOCK, get(handlers::get_clock))
        .route(weather::GET_WEATHER, get(handlers::get_weather));

    Router::new()
        .route(health::HEALTH, get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::WeatherSettings;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::{
        DatasetInfo, ErrorContext, RepositoryError, RepositoryResult, RouteRepository,
    };
    use crate::models::RouteRecord;
    use crate::services::weather::WeatherService;

    const DATA: &str = r#"{"analytics": [
        {"Driver Name": "Luis", "Planned Route Start Date": "2024-03-02", "Total Journey Seconds": 7200, "Total Visited Customers Count": 4},
        {"Driver Name": "Ana", "Planned Route Start Date": "2024-03-01", "Total Journey Seconds": 3600, "Total Visited Customers Count": 2},
        {"Driver Name": "Luis", "Planned Route Start Date": "2024-04-01", "Total Journey Seconds": 1800}
    ]}"#;

    fn app() -> Router {
        let repo = LocalRepository::from_json_str(DATA).unwrap();
        let weather = WeatherService::new(WeatherSettings {
            enabled: false,
            ..Default::default()
        });
        create_router(AppState::new(Arc::new(repo), weather))
    }

    /// Repository whose data file could not be read.
    struct UnreadableRepository;

    #[async_trait::async_trait]
    impl RouteRepository for UnreadableRepository {
        async fn health_check(&self) -> RepositoryResult<bool> {
            Ok(true)
        }

        async fn list_records(&self) -> RepositoryResult<Arc<[RouteRecord]>> {
            Err(RepositoryError::load_with_context(
                "permission denied",
                ErrorContext::new("list_records").with_details("io_error_kind=PermissionDenied"),
            ))
        }

        async fn dataset_info(&self) -> RepositoryResult<DatasetInfo> {
            Err(RepositoryError::load_with_context(
                "permission denied",
                ErrorContext::new("dataset_info"),
            ))
        }
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        get_json_from(app(), uri).await
    }

    async fn get_json_from(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["data"], "loaded");
        assert_eq!(body["record_count"], 3);
        assert!(body["checksum"].is_string());
    }

    #[tokio::test]
    async fn test_drivers() {
        let (status, body) = get_json("/v1/drivers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["drivers"], serde_json::json!(["Luis", "Ana"]));
        assert_eq!(body["total"], 2);
    }

    #[tokio::test]
    async fn test_dashboard_filter_and_sort() {
        let (status, body) = get_json("/v1/dashboard?driver=Luis&date=2024-03&mode=month").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched_records"], 1);
        assert_eq!(body["total_records"], 3);
        assert_eq!(body["summary"]["average_duration"], "02:00:00");

        let (_, body) = get_json("/v1/dashboard?click=0").await;
        assert_eq!(body["rows"][0]["driver"], "Ana");
        assert_eq!(body["sort"]["column"], 0);
        assert_eq!(body["sort"]["ascending"], true);
    }

    #[tokio::test]
    async fn test_dashboard_bad_query() {
        let (status, body) = get_json("/v1/dashboard?sort=12").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_clock() {
        let (status, body) = get_json("/v1/clock").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["display"].as_str().unwrap().contains(" - "));
    }

    #[tokio::test]
    async fn test_weather_without_location() {
        let (status, body) = get_json("/v1/weather").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "unavailable");
        assert_eq!(body["message"], "No se pudo obtener la ubicación.");
    }

    #[tokio::test]
    async fn test_repository_failure_is_json_error() {
        let weather = WeatherService::new(WeatherSettings {
            enabled: false,
            ..Default::default()
        });
        let app = create_router(AppState::new(Arc::new(UnreadableRepository), weather));

        let (status, body) = get_json_from(app.clone(), "/v1/dashboard").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "REPOSITORY_ERROR");
        assert_eq!(body["details"], "io_error_kind=PermissionDenied");

        let (status, _) = get_json_from(app, "/health").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    ClockReading, DashboardQuery, DashboardView, DriverList, HealthResponse, WeatherQuery,
    WeatherWidget,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{build_dashboard, current_clock, driver_options};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the data store is usable and which dataset it holds.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let (data, record_count, checksum) = match state.repository.health_check().await {
        Ok(true) => {
            let info = state.repository.dataset_info().await?;
            let status = if info.record_count == 0 { "empty" } else { "loaded" };
            (status.to_string(), info.record_count, info.checksum)
        }
        Ok(false) => ("unavailable".to_string(), 0, None),
        Err(e) => (format!("error: {}", e), 0, None),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        data,
        record_count,
        checksum,
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /v1/drivers
///
/// Distinct driver names in first-seen order.
pub async fn list_drivers(State(state): State<AppState>) -> HandlerResult<DriverList> {
    let records = state.repository.list_records().await?;
    Ok(Json(DriverList::from(driver_options(&records))))
}

/// GET /v1/dashboard
///
/// Filter, sort, aggregate and format the records for one redraw.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> HandlerResult<DashboardView> {
    let request = query.into_request().map_err(AppError::BadRequest)?;
    let records = state.repository.list_records().await?;
    Ok(Json(build_dashboard(&records, &request)))
}

// =============================================================================
// Widgets
// =============================================================================

/// GET /v1/clock
pub async fn get_clock() -> Json<ClockReading> {
    Json(current_clock())
}

/// GET /v1/weather
///
/// Always answers 200; a failed lookup yields the `unavailable` widget.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherWidget> {
    let (lat, lon) = query.coordinates();
    Json(state.weather.widget(lat, lon).await)
}

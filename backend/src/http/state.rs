//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::RouteRepository;
use crate::services::weather::WeatherService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of route records
    pub repository: Arc<dyn RouteRepository>,
    /// Forecast provider for the weather widget
    pub weather: Arc<WeatherService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn RouteRepository>, weather: WeatherService) -> Self {
        Self {
            repository,
            weather: Arc::new(weather),
        }
    }
}

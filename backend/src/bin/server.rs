//! Route dashboard HTTP server.
//!
//! Loads the consolidated analytics document once, then serves the dashboard
//! API until stopped.
//!
//! # Usage
//!
//! ```bash
//! DATA_PATH=data/consolidated_data.json cargo run --bin dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATA_PATH`: Analytics document (default: consolidated_data.json)
//! - `WEATHER_BASE_URL`: Forecast endpoint (default: Open-Meteo)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use route_dashboard::config::DashboardConfig;
use route_dashboard::db::LocalRepository;
use route_dashboard::http::{create_router, AppState};
use route_dashboard::services::WeatherService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting route dashboard server");

    let config = DashboardConfig::from_default_location()?.with_env_overrides()?;

    // A missing or broken data file leaves the dashboard empty instead of
    // refusing to start.
    let repository = match LocalRepository::from_file(&config.data.path) {
        Ok(repo) => repo,
        Err(e) => {
            error!("Failed to load route data: {}", e);
            LocalRepository::empty()
        }
    };
    info!("Repository initialized with {} records", repository.len());

    let state = AppState::new(Arc::new(repository), WeatherService::new(config.weather.clone()));
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

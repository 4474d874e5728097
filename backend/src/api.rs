//! Public API surface for the dashboard.
//!
//! This file consolidates the DTO types served over HTTP.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::charts::ChartData;
pub use crate::routes::charts::ChartSeries;
pub use crate::routes::charts::DashboardCharts;
pub use crate::routes::clock::ClockReading;
pub use crate::routes::clock::Theme;
pub use crate::routes::dashboard::DashboardRequest;
pub use crate::routes::dashboard::DashboardView;
pub use crate::routes::dashboard::SummaryView;
pub use crate::routes::dashboard::TableRow;
pub use crate::routes::drivers::DriverList;
pub use crate::routes::health::HealthResponse;
pub use crate::routes::weather::WeatherDay;
pub use crate::routes::weather::WeatherWidget;

pub use crate::models::{DateMode, RouteFilter, RouteRecord, SortColumn, SortState};
pub use crate::services::aggregation::SummaryStats;

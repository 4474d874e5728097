//! Data Transfer Objects for the HTTP API.
//!
//! Response types are re-exported from the routes module since they already
//! derive Serialize/Deserialize. Query parameters arrive as raw strings and
//! are validated here, so a bad value produces the JSON error body instead of
//! the extractor's plain-text rejection.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Clock
    ClockReading,
    // Dashboard
    DashboardRequest, DashboardView, SummaryView, TableRow,
    // Drivers
    DriverList,
    // Health
    HealthResponse,
    // Weather
    WeatherWidget,
};
use crate::models::{DateMode, RouteFilter, SortColumn, SortState};

/// Query parameters for the dashboard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardQuery {
    /// Exact driver name; empty or missing means all drivers
    #[serde(default)]
    pub driver: Option<String>,
    /// `YYYY-MM-DD` (day mode) or `YYYY-MM` prefix (month mode)
    #[serde(default)]
    pub date: Option<String>,
    /// `day` (default) or `month`
    #[serde(default)]
    pub mode: Option<String>,
    /// Active sort column index (0-8), missing means load order
    #[serde(default)]
    pub sort: Option<String>,
    /// Direction of the active sort column (default: true)
    #[serde(default)]
    pub ascending: Option<String>,
    /// Column header clicked; applied on top of `sort`/`ascending`
    #[serde(default)]
    pub click: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_column(name: &str, value: &str) -> Result<SortColumn, String> {
    let index: u8 = value
        .parse()
        .map_err(|_| format!("{} must be a column index between 0 and 8, got '{}'", name, value))?;
    SortColumn::try_from(index)
}

impl DashboardQuery {
    /// Validate the query and build the pipeline request.
    pub fn into_request(self) -> Result<DashboardRequest, String> {
        let mode = match non_empty(&self.mode) {
            Some(mode) => mode.parse::<DateMode>()?,
            None => DateMode::default(),
        };

        let column = non_empty(&self.sort)
            .map(|v| parse_column("sort", v))
            .transpose()?;

        let ascending = match non_empty(&self.ascending) {
            Some(v) => v
                .parse::<bool>()
                .map_err(|_| format!("ascending must be true or false, got '{}'", v))?,
            None => true,
        };

        let mut sort = SortState::new(column, ascending);
        if let Some(click) = non_empty(&self.click) {
            sort = sort.select(parse_column("click", click)?);
        }

        Ok(DashboardRequest {
            filter: RouteFilter::new(
                self.driver.unwrap_or_default(),
                self.date.unwrap_or_default(),
                mode,
            ),
            sort,
        })
    }
}

/// Query parameters for the weather endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeatherQuery {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
}

impl WeatherQuery {
    /// Coordinates that parse as numbers; anything else counts as missing.
    pub fn coordinates(&self) -> (Option<f64>, Option<f64>) {
        let parse = |v: &Option<String>| non_empty(v).and_then(|s| s.parse::<f64>().ok());
        (parse(&self.lat), parse(&self.lon))
    }
}

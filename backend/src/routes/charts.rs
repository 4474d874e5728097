use serde::{Deserialize, Serialize};

/// One bar series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Bar chart data keyed by driver name, one label per table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// The two dashboard charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    /// Distance in km per route.
    pub distance: ChartData,
    /// Click and sequence adherence in percent per route.
    pub adherence: ChartData,
}

pub const DISTANCE_LABEL: &str = "Distancia (km)";
pub const CLICK_ADHERENCE_LABEL: &str = "Adherencia Click (%)";
pub const SEQUENCE_ADHERENCE_LABEL: &str = "Adherencia Secuencia (%)";

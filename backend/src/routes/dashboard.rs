use serde::{Deserialize, Serialize};

use super::charts::DashboardCharts;
use crate::models::{RouteFilter, RouteRecord, SortState};
use crate::services::aggregation::SummaryStats;
use crate::services::formatting;

// =========================================================
// Dashboard types + route
// =========================================================

/// One table row, cells already formatted for display, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub driver: String,
    pub date: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub distance_km: String,
    pub click_score: String,
    pub sequence_adherence: String,
    pub stop_minutes: String,
    pub visited_customers: String,
}

impl TableRow {
    /// Cells as an ordered tuple matching the nine column headers.
    pub fn cells(&self) -> [&str; 9] {
        [
            self.driver.as_str(),
            self.date.as_str(),
            self.departure_time.as_str(),
            self.arrival_time.as_str(),
            self.distance_km.as_str(),
            self.click_score.as_str(),
            self.sequence_adherence.as_str(),
            self.stop_minutes.as_str(),
            self.visited_customers.as_str(),
        ]
    }
}

impl From<&RouteRecord> for TableRow {
    fn from(record: &RouteRecord) -> Self {
        Self {
            driver: record.driver().to_string(),
            date: formatting::format_date(record.planned_start_date.as_deref()),
            departure_time: formatting::format_time_of_day(
                record.actual_departure_time.as_deref(),
            ),
            arrival_time: formatting::format_time_of_day(record.actual_arrival_time.as_deref()),
            distance_km: formatting::format_distance_km(record.total_driven_meters),
            click_score: formatting::format_percentage(record.driver_click_score),
            sequence_adherence: formatting::format_percentage(record.sequence_adherence),
            stop_minutes: formatting::format_stop_minutes(record.total_stop_time_seconds),
            visited_customers: formatting::format_count(record.total_visited_customers_count),
        }
    }
}

/// Summary panel: raw statistics plus their display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub stats: SummaryStats,
    /// `HH:MM:SS`, empty when no record had a journey duration.
    pub average_duration: String,
    /// Empty when the total is zero.
    pub visited_customers: String,
}

impl From<SummaryStats> for SummaryView {
    fn from(stats: SummaryStats) -> Self {
        Self {
            average_duration: formatting::format_average_duration(stats.average_duration_seconds),
            visited_customers: formatting::format_count(Some(stats.visited_customers)),
            stats,
        }
    }
}

/// Inputs of one pipeline run: the current filter controls and the sort state
/// the client holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub filter: RouteFilter,
    pub sort: SortState,
}

/// Everything the client needs to redraw table, summary and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Column titles in header order; the index is the `sort` value.
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub summary: SummaryView,
    pub charts: DashboardCharts,
    /// State the client must send back with the next request.
    pub sort: SortState,
    pub total_records: usize,
    pub matched_records: usize,
}

/// Route path for the dashboard view
pub const GET_DASHBOARD: &str = "/dashboard";

//! The dashboard pipeline: filter → sort → aggregate → format → charts.
//!
//! Every call recomputes the whole view from the full record set; nothing is
//! cached between calls.

use crate::models::{RouteRecord, SortColumn};
use crate::routes::dashboard::{DashboardRequest, DashboardView, SummaryView, TableRow};
use crate::services::aggregation::compute_summary;
use crate::services::charts::build_charts;
use crate::services::filtering::filter_by;
use crate::services::sorting::apply_sort;

/// Run the full pipeline for one request.
pub fn build_dashboard(records: &[RouteRecord], request: &DashboardRequest) -> DashboardView {
    let matched = filter_by(records, &request.filter);
    let ordered = apply_sort(matched, request.sort);

    let summary = compute_summary(&ordered);
    let rows: Vec<TableRow> = ordered.iter().map(|r| TableRow::from(*r)).collect();
    let charts = build_charts(&ordered);

    log::debug!(
        "Dashboard built: {} of {} records (driver='{}', date='{}', mode={}, sort={:?})",
        rows.len(),
        records.len(),
        request.filter.driver,
        request.filter.date,
        request.filter.mode,
        request.sort,
    );

    DashboardView {
        headers: SortColumn::ALL.iter().map(ToString::to_string).collect(),
        matched_records: rows.len(),
        total_records: records.len(),
        rows,
        summary: SummaryView::from(summary),
        charts,
        sort: request.sort,
    }
}

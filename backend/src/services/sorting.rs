//! Column-indexed ordering of route records.
//!
//! Each [`SortColumn`] maps a record to a [`SortKey`]; records are then
//! ordered with a stable sort so equal keys keep their incoming order in both
//! directions.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::models::{RouteRecord, SortColumn, SortState};

/// Comparison key extracted from one record for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Date(NaiveDate),
    Number(f64),
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            // -0.0 and 0.0 tie; values are finite once deserialized
            (SortKey::Number(a), SortKey::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            // keys for one column always share a variant
            _ => Ordering::Equal,
        }
    }
}

/// `HH:MM:SS` → seconds since midnight; 0 when absent or malformed.
pub fn time_to_seconds(time: Option<&str>) -> u32 {
    let Some(time) = time else { return 0 };
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 3 {
        return 0;
    }
    let mut total = 0u32;
    for (part, factor) in parts.iter().zip([3600u32, 60, 1]) {
        match part.trim().parse::<u32>() {
            Ok(v) => total = total.saturating_add(v.saturating_mul(factor)),
            Err(_) => return 0,
        }
    }
    total
}

/// Planned start date as a calendar date; absent or unparseable dates sort as
/// the earliest possible date.
pub fn planned_date_key(date: Option<&str>) -> NaiveDate {
    date.and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
        .unwrap_or(NaiveDate::MIN)
}

/// Extract the comparison key of `column` from `record`.
pub fn sort_key(record: &RouteRecord, column: SortColumn) -> SortKey<'_> {
    match column {
        SortColumn::DriverName => SortKey::Text(record.driver()),
        SortColumn::PlannedStartDate => {
            SortKey::Date(planned_date_key(record.planned_start_date.as_deref()))
        }
        SortColumn::DepartureTime => {
            SortKey::Number(time_to_seconds(record.actual_departure_time.as_deref()) as f64)
        }
        SortColumn::ArrivalTime => {
            SortKey::Number(time_to_seconds(record.actual_arrival_time.as_deref()) as f64)
        }
        SortColumn::DrivenMeters => SortKey::Number(record.total_driven_meters.unwrap_or(0.0)),
        SortColumn::ClickScore => SortKey::Number(record.driver_click_score.unwrap_or(0.0)),
        SortColumn::SequenceAdherence => {
            SortKey::Number(record.sequence_adherence.unwrap_or(0.0))
        }
        SortColumn::StopTimeMinutes => {
            SortKey::Number(record.total_stop_time_seconds.unwrap_or(0.0) / 60.0)
        }
        SortColumn::VisitedCustomers => {
            SortKey::Number(record.total_visited_customers_count.unwrap_or(0) as f64)
        }
    }
}

/// Compare two records on `column`.
pub fn compare_records(a: &RouteRecord, b: &RouteRecord, column: SortColumn) -> Ordering {
    sort_key(a, column).compare(&sort_key(b, column))
}

/// Order `records` by `column`. `None` leaves the input order untouched.
pub fn sort_records(
    mut records: Vec<&RouteRecord>,
    column: Option<SortColumn>,
    ascending: bool,
) -> Vec<&RouteRecord> {
    let Some(column) = column else {
        return records;
    };
    records.sort_by(|a, b| {
        let ordering = compare_records(a, b, column);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    records
}

/// Order `records` according to a [`SortState`].
pub fn apply_sort(records: Vec<&RouteRecord>, state: SortState) -> Vec<&RouteRecord> {
    sort_records(records, state.column, state.ascending)
}

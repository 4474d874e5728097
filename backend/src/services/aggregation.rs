use serde::{Deserialize, Serialize};

use crate::models::RouteRecord;

/// Summary statistics over the currently filtered record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Mean journey duration; `None` when no record carries one.
    pub average_duration_seconds: Option<f64>,
    pub visited_customers: u64,
}

/// Mean of `Total Journey Seconds` over the records that have it.
///
/// Records without a journey duration are skipped rather than counted as
/// zero; an input with no durations yields `None`.
pub fn average_duration<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a RouteRecord>,
{
    let (sum, count) = records
        .into_iter()
        .filter_map(|r| r.total_journey_seconds)
        .fold((0.0_f64, 0usize), |(sum, count), secs| (sum + secs, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Total visited customers, absent counts as zero.
pub fn visited_customers<'a, I>(records: I) -> u64
where
    I: IntoIterator<Item = &'a RouteRecord>,
{
    records
        .into_iter()
        .map(|r| r.total_visited_customers_count.unwrap_or(0))
        .sum()
}

pub fn compute_summary(records: &[&RouteRecord]) -> SummaryStats {
    SummaryStats {
        average_duration_seconds: average_duration(records.iter().copied()),
        visited_customers: visited_customers(records.iter().copied()),
    }
}

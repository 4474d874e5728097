use crate::models::{DateMode, RouteFilter, RouteRecord};

/// Select the records matching `filter`, keeping their relative order.
pub fn filter_by<'a>(records: &'a [RouteRecord], filter: &RouteFilter) -> Vec<&'a RouteRecord> {
    if filter.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Filter by driver name and date criterion.
///
/// An empty `driver` or `date` matches every record.
pub fn filter_records<'a>(
    records: &'a [RouteRecord],
    driver: &str,
    date: &str,
    mode: DateMode,
) -> Vec<&'a RouteRecord> {
    filter_by(records, &RouteFilter::new(driver, date, mode))
}

/// Distinct non-empty driver names in first-seen order.
pub fn driver_options(records: &[RouteRecord]) -> Vec<String> {
    let mut drivers: Vec<String> = Vec::new();
    for name in records.iter().filter_map(|r| r.driver_name.as_deref()) {
        if !name.is_empty() && !drivers.iter().any(|d| d == name) {
            drivers.push(name.to_string());
        }
    }
    drivers
}

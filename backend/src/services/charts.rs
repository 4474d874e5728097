use crate::models::RouteRecord;
use crate::routes::charts::{
    ChartData, ChartSeries, DashboardCharts, CLICK_ADHERENCE_LABEL, DISTANCE_LABEL,
    SEQUENCE_ADHERENCE_LABEL,
};
use crate::services::formatting::round2;

fn series(
    records: &[&RouteRecord],
    label: &str,
    color: &str,
    value: impl Fn(&RouteRecord) -> f64,
) -> ChartSeries {
    ChartSeries {
        label: label.to_string(),
        color: color.to_string(),
        values: records.iter().map(|r| value(*r)).collect(),
    }
}

fn ratio_percent(ratio: Option<f64>) -> f64 {
    ratio.map(|r| round2(r * 100.0)).unwrap_or(0.0)
}

/// Build both bar charts from the filtered, sorted records. Bars line up with
/// the table rows; absent values plot as zero.
pub fn build_charts(records: &[&RouteRecord]) -> DashboardCharts {
    let labels: Vec<String> = records.iter().map(|r| r.driver().to_string()).collect();

    let distance = ChartData {
        labels: labels.clone(),
        series: vec![series(records, DISTANCE_LABEL, "blue", |r| {
            r.total_driven_meters
                .map(|m| round2(m / 1000.0))
                .unwrap_or(0.0)
        })],
    };

    let adherence = ChartData {
        labels,
        series: vec![
            series(records, CLICK_ADHERENCE_LABEL, "green", |r| {
                ratio_percent(r.driver_click_score)
            }),
            series(records, SEQUENCE_ADHERENCE_LABEL, "red", |r| {
                ratio_percent(r.sequence_adherence)
            }),
        ],
    };

    DashboardCharts {
        distance,
        adherence,
    }
}

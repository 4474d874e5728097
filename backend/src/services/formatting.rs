//! Display formatting for table cells and summary values.
//!
//! Every function is total: absent input yields an empty string, and malformed
//! input is either passed through unchanged or blanked, never rejected.

/// Time-of-day value the feed writes when no time was recorded.
pub const UNRECORDED_TIME: &str = "00:00:00";

/// `YYYY-MM-DD` → `DD-MM-YYYY`. Anything that does not split into exactly
/// three `-` parts is returned unchanged.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date.filter(|d| !d.is_empty()) else {
        return String::new();
    };
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return date.to_string();
    }
    format!("{}-{}-{}", parts[2], parts[1], parts[0])
}

/// Seconds → `HH:MM:SS`. Hours are not wrapped at 24 and grow past two
/// digits when needed.
pub fn format_seconds_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Meters → kilometers with two decimals; blank for zero or absent.
pub fn format_distance_km(meters: Option<f64>) -> String {
    match non_zero(meters) {
        Some(m) => format_fixed2(m / 1000.0),
        None => String::new(),
    }
}

/// Ratio in `[0, 1]` → `NN.NN%`; blank for zero or absent.
pub fn format_percentage(ratio: Option<f64>) -> String {
    match non_zero(ratio) {
        Some(r) => format!("{}%", format_fixed2(r * 100.0)),
        None => String::new(),
    }
}

/// Stop time seconds → minutes with two decimals; blank for zero or absent.
pub fn format_stop_minutes(seconds: Option<f64>) -> String {
    match non_zero(seconds) {
        Some(s) => format_fixed2(s / 60.0),
        None => String::new(),
    }
}

/// `HH:MM:SS` passed through, except the unrecorded sentinel which is blank.
pub fn format_time_of_day(time: Option<&str>) -> String {
    match time {
        Some(t) if !t.is_empty() && t != UNRECORDED_TIME => t.to_string(),
        _ => String::new(),
    }
}

/// Integer count; blank for zero or absent.
pub fn format_count(count: Option<u64>) -> String {
    match count {
        Some(n) if n > 0 => n.to_string(),
        _ => String::new(),
    }
}

/// Average journey duration for the summary panel; blank only when there was
/// nothing to average.
pub fn format_average_duration(seconds: Option<f64>) -> String {
    seconds.map(format_seconds_hms).unwrap_or_default()
}

/// Round to two decimals, ties away from zero. Table cells and chart values
/// both go through here so they always agree.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `round2` rendered with exactly two decimals.
pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", round2(value))
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

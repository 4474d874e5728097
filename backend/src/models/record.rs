use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One driver's route summary for a planned date, as it comes from the
/// `analytics` array of the consolidated data file.
///
/// Every field is optional. Values of the wrong JSON type are read as absent
/// so a single malformed cell never drops the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    #[serde(rename = "Driver Name", default, deserialize_with = "lenient_string")]
    pub driver_name: Option<String>,
    #[serde(
        rename = "Planned Route Start Date",
        default,
        deserialize_with = "lenient_string"
    )]
    pub planned_start_date: Option<String>,
    #[serde(
        rename = "Actual Route Departure Time",
        default,
        deserialize_with = "lenient_string"
    )]
    pub actual_departure_time: Option<String>,
    #[serde(
        rename = "Actual Route Arrival Time",
        default,
        deserialize_with = "lenient_string"
    )]
    pub actual_arrival_time: Option<String>,
    #[serde(rename = "Total Driven Meters", default, deserialize_with = "lenient_f64")]
    pub total_driven_meters: Option<f64>,
    #[serde(rename = "Driver Click Score", default, deserialize_with = "lenient_f64")]
    pub driver_click_score: Option<f64>,
    #[serde(rename = "Sequence Adherence", default, deserialize_with = "lenient_f64")]
    pub sequence_adherence: Option<f64>,
    #[serde(
        rename = "Total Stop Time Seconds",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub total_stop_time_seconds: Option<f64>,
    #[serde(
        rename = "Total Visited Customers Count",
        default,
        deserialize_with = "lenient_u64"
    )]
    pub total_visited_customers_count: Option<u64>,
    #[serde(
        rename = "Total Journey Seconds",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub total_journey_seconds: Option<f64>,
}

impl RouteRecord {
    /// Driver name, empty when absent.
    pub fn driver(&self) -> &str {
        self.driver_name.as_deref().unwrap_or("")
    }

    /// Planned start date (`YYYY-MM-DD`), empty when absent.
    pub fn planned_date(&self) -> &str {
        self.planned_start_date.as_deref().unwrap_or("")
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_f64()
        .filter(|v| v.is_finite()))
}

/// Counts arrive as integers, but some exports write them as floats (`3.0`).
/// A count with a fractional part is not a count and reads as absent.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_u64() {
        return Ok(Some(n));
    }
    Ok(value
        .as_f64()
        .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
        .map(|v| v as u64))
}

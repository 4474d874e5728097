use serde::{Deserialize, Serialize};

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    /// `YYYY-MM-DD` as returned by the forecast API.
    pub date: String,
    pub weather_code: Option<i64>,
    pub emoji: String,
    pub max_celsius: Option<f64>,
    pub min_celsius: Option<f64>,
}

/// Weather widget content: either the forecast or a fallback message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WeatherWidget {
    Available { title: String, days: Vec<WeatherDay> },
    Unavailable { message: String },
}

impl WeatherWidget {
    pub fn unavailable(message: impl Into<String>) -> Self {
        WeatherWidget::Unavailable {
            message: message.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, WeatherWidget::Available { .. })
    }
}

pub const WIDGET_TITLE: &str = "Clima 5 días";
pub const LOCATION_UNAVAILABLE: &str = "No se pudo obtener la ubicación.";
pub const WEATHER_UNAVAILABLE: &str = "No se pudo obtener el clima.";

/// Route path for the weather widget
pub const GET_WEATHER: &str = "/weather";

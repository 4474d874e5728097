//! Five-day forecast widget backed by the Open-Meteo API.
//!
//! The forecast is requested once per call, with a timeout and no retry.
//! Every failure collapses into [`WeatherWidget::Unavailable`] with one of the
//! two fallback messages; the cause is only logged.

use serde::Deserialize;

use crate::config::WeatherSettings;
use crate::routes::weather::{
    WeatherDay, WeatherWidget, LOCATION_UNAVAILABLE, WEATHER_UNAVAILABLE, WIDGET_TITLE,
};

/// Errors raised while obtaining a forecast.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("No coordinates provided")]
    MissingCoordinates,

    #[error("Invalid coordinates: latitude={latitude}, longitude={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Weather service is disabled")]
    Disabled,

    #[error("Weather request failed: {0}")]
    Request(String),

    #[error("Weather service returned HTTP {0}")]
    Status(u16),

    #[error("Forecast response has no daily section")]
    MissingDaily,

    #[error("Forecast series '{series}' has {len} entries, expected at least {expected}")]
    ShortSeries {
        series: &'static str,
        len: usize,
        expected: usize,
    },
}

impl WeatherError {
    /// Fallback text shown in the widget for this error.
    pub fn widget_message(&self) -> &'static str {
        match self {
            WeatherError::MissingCoordinates | WeatherError::InvalidCoordinates { .. } => {
                LOCATION_UNAVAILABLE
            }
            _ => WEATHER_UNAVAILABLE,
        }
    }
}

/// Emoji for a WMO weather code as reported by Open-Meteo.
pub fn weather_emoji(code: i64) -> &'static str {
    match code {
        0 => "☀️",
        1..=3 => "🌤️",
        45..=48 => "🌫️",
        51..=67 => "🌧️",
        71..=77 => "❄️",
        80..=82 => "🌦️",
        c if c >= 95 => "⛈️",
        _ => "🌈",
    }
}

/// `daily` block of an Open-Meteo forecast response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyForecast {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub weathercode: Vec<Option<i64>>,
}

/// Open-Meteo forecast response; only the fields the widget reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub daily: Option<DailyForecast>,
}

fn check_len(series: &'static str, len: usize, expected: usize) -> Result<(), WeatherError> {
    if len < expected {
        return Err(WeatherError::ShortSeries {
            series,
            len,
            expected,
        });
    }
    Ok(())
}

/// Take the first `days` entries of the daily series.
pub fn forecast_days(
    response: &ForecastResponse,
    days: usize,
) -> Result<Vec<WeatherDay>, WeatherError> {
    let daily = response.daily.as_ref().ok_or(WeatherError::MissingDaily)?;
    check_len("time", daily.time.len(), days)?;
    check_len("temperature_2m_max", daily.temperature_2m_max.len(), days)?;
    check_len("temperature_2m_min", daily.temperature_2m_min.len(), days)?;
    check_len("weathercode", daily.weathercode.len(), days)?;

    Ok((0..days)
        .map(|i| {
            let code = daily.weathercode[i];
            WeatherDay {
                date: daily.time[i].clone(),
                weather_code: code,
                // a null code falls through to "unknown"
                emoji: weather_emoji(code.unwrap_or(-1)).to_string(),
                max_celsius: daily.temperature_2m_max[i],
                min_celsius: daily.temperature_2m_min[i],
            }
        })
        .collect())
}

/// Validate a latitude/longitude pair coming from the client.
pub fn coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(f64, f64), WeatherError> {
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return Err(WeatherError::MissingCoordinates);
    };
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(WeatherError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }
    Ok((latitude, longitude))
}

#[cfg(feature = "weather")]
fn request_error(err: reqwest::Error) -> WeatherError {
    WeatherError::Request(err.to_string())
}

/// HTTP client for the forecast endpoint.
#[cfg(feature = "weather")]
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    settings: WeatherSettings,
}

#[cfg(feature = "weather")]
impl WeatherClient {
    pub fn new(settings: WeatherSettings) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(request_error)?;
        Ok(Self { client, settings })
    }

    /// Fetch and parse the daily forecast for one location.
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<WeatherDay>, WeatherError> {
        let response = self
            .client
            .get(&self.settings.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,weathercode".to_string(),
                ),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body: ForecastResponse = response.json().await.map_err(request_error)?;
        forecast_days(&body, self.settings.forecast_days)
    }
}

/// Produces the weather widget; owns the HTTP client when the `weather`
/// feature is enabled.
#[derive(Debug, Clone)]
pub struct WeatherService {
    #[cfg(feature = "weather")]
    client: Option<WeatherClient>,
}

impl WeatherService {
    pub fn new(settings: WeatherSettings) -> Self {
        #[cfg(feature = "weather")]
        let client = if settings.enabled {
            match WeatherClient::new(settings) {
                Ok(client) => Some(client),
                Err(e) => {
                    log::error!("Failed to build weather client: {}", e);
                    None
                }
            }
        } else {
            None
        };

        #[cfg(not(feature = "weather"))]
        log::info!(
            "Built without the weather feature, {} will not be queried",
            settings.base_url
        );

        Self {
            #[cfg(feature = "weather")]
            client,
        }
    }

    /// Forecast for the given coordinates, or the error explaining why there is none.
    pub async fn forecast(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Vec<WeatherDay>, WeatherError> {
        let (latitude, longitude) = coordinates(latitude, longitude)?;
        self.fetch(latitude, longitude).await
    }

    #[cfg(feature = "weather")]
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Vec<WeatherDay>, WeatherError> {
        let client = self.client.as_ref().ok_or(WeatherError::Disabled)?;
        client.fetch_forecast(latitude, longitude).await
    }

    #[cfg(not(feature = "weather"))]
    async fn fetch(&self, _latitude: f64, _longitude: f64) -> Result<Vec<WeatherDay>, WeatherError> {
        Err(WeatherError::Disabled)
    }

    /// Widget content; failures become the matching fallback message.
    pub async fn widget(&self, latitude: Option<f64>, longitude: Option<f64>) -> WeatherWidget {
        match self.forecast(latitude, longitude).await {
            Ok(days) => WeatherWidget::Available {
                title: WIDGET_TITLE.to_string(),
                days,
            },
            Err(e) => {
                log::warn!("Weather unavailable: {}", e);
                WeatherWidget::unavailable(e.widget_message())
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// Day or night background theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Day,
    Night,
}

/// Clock widget reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    /// `D/M/YYYY - H:MM:SS`
    pub display: String,
    pub date: String,
    pub time: String,
    pub theme: Theme,
}

/// Route path for the clock widget
pub const GET_CLOCK: &str = "/clock";

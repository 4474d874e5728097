use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::record::RouteRecord;

/// How the date criterion is compared against `Planned Route Start Date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    /// Exact `YYYY-MM-DD` equality.
    #[default]
    Day,
    /// `YYYY-MM` prefix match.
    Month,
}

impl FromStr for DateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "dia" | "día" => Ok(Self::Day),
            "month" | "mes" => Ok(Self::Month),
            _ => Err(format!("Unknown date mode: {}", s)),
        }
    }
}

impl fmt::Display for DateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateMode::Day => write!(f, "day"),
            DateMode::Month => write!(f, "month"),
        }
    }
}

/// Driver + date criteria applied to every record.
///
/// Empty strings match everything, so `RouteFilter::default()` is the
/// identity filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFilter {
    pub driver: String,
    pub date: String,
    pub mode: DateMode,
}

impl RouteFilter {
    pub fn new(driver: impl Into<String>, date: impl Into<String>, mode: DateMode) -> Self {
        Self {
            driver: driver.into(),
            date: date.into(),
            mode,
        }
    }

    pub fn matches_driver(&self, record: &RouteRecord) -> bool {
        self.driver.is_empty() || record.driver_name.as_deref() == Some(self.driver.as_str())
    }

    pub fn matches_date(&self, record: &RouteRecord) -> bool {
        if self.date.is_empty() {
            return true;
        }
        match (&record.planned_start_date, self.mode) {
            (Some(planned), DateMode::Day) => *planned == self.date,
            (Some(planned), DateMode::Month) => planned.starts_with(&self.date),
            (None, _) => false,
        }
    }

    /// Both predicates must pass.
    pub fn matches(&self, record: &RouteRecord) -> bool {
        self.matches_driver(record) && self.matches_date(record)
    }

    pub fn is_empty(&self) -> bool {
        self.driver.is_empty() && self.date.is_empty()
    }
}

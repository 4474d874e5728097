#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use route_dashboard::models::RouteRecord;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Small analytics document covering two drivers, two months and a record
/// with malformed fields.
pub const SAMPLE_DOCUMENT: &str = r#"{
  "analytics": [
    {
      "Driver Name": "Carlos",
      "Planned Route Start Date": "2024-03-15",
      "Actual Route Departure Time": "08:15:00",
      "Actual Route Arrival Time": "16:40:30",
      "Total Driven Meters": 84250.5,
      "Driver Click Score": 0.875,
      "Sequence Adherence": 0.6,
      "Total Stop Time Seconds": 5400,
      "Total Visited Customers Count": 22,
      "Total Journey Seconds": 30330
    },
    {
      "Driver Name": "Ana",
      "Planned Route Start Date": "2024-03-15",
      "Actual Route Departure Time": "07:05:00",
      "Actual Route Arrival Time": "14:20:00",
      "Total Driven Meters": 61000,
      "Driver Click Score": 0.92,
      "Sequence Adherence": 0.81,
      "Total Stop Time Seconds": 3600,
      "Total Visited Customers Count": 18,
      "Total Journey Seconds": 26100
    },
    {
      "Driver Name": "Carlos",
      "Planned Route Start Date": "2024-04-02",
      "Actual Route Departure Time": "00:00:00",
      "Actual Route Arrival Time": "00:00:00",
      "Total Driven Meters": "n/a",
      "Driver Click Score": null,
      "Total Visited Customers Count": 0
    },
    {
      "Driver Name": "Ana",
      "Planned Route Start Date": "2024-03-16",
      "Actual Route Departure Time": "09:00:00",
      "Actual Route Arrival Time": "13:30:00",
      "Total Driven Meters": 30500,
      "Driver Click Score": 0.5,
      "Sequence Adherence": 0.5,
      "Total Stop Time Seconds": 1200,
      "Total Visited Customers Count": 9,
      "Total Journey Seconds": 16200
    }
  ]
}"#;

pub fn record(driver: &str, date: &str) -> RouteRecord {
    RouteRecord {
        driver_name: Some(driver.to_string()),
        planned_start_date: Some(date.to_string()),
        ..Default::default()
    }
}

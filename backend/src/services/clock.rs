use chrono::{Local, NaiveDateTime, Timelike};

use crate::routes::clock::{ClockReading, Theme};

/// Hour (inclusive) at which the day theme starts.
pub const DAY_START_HOUR: u32 = 6;
/// Hour (inclusive) at which the night theme starts.
pub const NIGHT_START_HOUR: u32 = 18;

pub fn theme_for_hour(hour: u32) -> Theme {
    if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
        Theme::Day
    } else {
        Theme::Night
    }
}

/// Clock reading for a local wall-clock time, formatted the es-ES way.
pub fn clock_reading(now: NaiveDateTime) -> ClockReading {
    let date = now.format("%-d/%-m/%Y").to_string();
    let time = now.format("%-H:%M:%S").to_string();
    ClockReading {
        display: format!("{} - {}", date, time),
        date,
        time,
        theme: theme_for_hour(now.hour()),
    }
}

pub fn current_clock() -> ClockReading {
    clock_reading(Local::now().naive_local())
}

//! Service layer: the pure dashboard pipeline plus the clock and weather
//! widgets.
//!
//! Data flows `filtering` → `sorting` → (`aggregation`, `formatting`,
//! `charts`), and `dashboard` runs the whole chain for one request.

pub mod aggregation;
pub mod charts;
pub mod clock;
pub mod dashboard;
pub mod filtering;
pub mod formatting;
pub mod sorting;
pub mod weather;


pub use clock::{clock_reading, current_clock};
pub use dashboard::build_dashboard;
pub use filtering::{driver_options, filter_by, filter_records};
pub use sorting::{apply_sort, sort_records};
pub use weather::{weather_emoji, WeatherError, WeatherService};

//! Domain types for the route dashboard.
//!
//! - [`record`]: one row of the consolidated analytics feed
//! - [`filter`]: driver and day/month criteria
//! - [`sort`]: sortable columns and the sort state machine

pub mod filter;
pub mod record;
pub mod sort;

pub use filter::{DateMode, RouteFilter};
pub use record::RouteRecord;
pub use sort::{SortColumn, SortState};

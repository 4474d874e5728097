//! Data access for route records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / services                               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  RouteRepository trait (repository)                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  LocalRepository (in-memory, filled by loader)          │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod checksum;
pub mod loader;
pub mod repositories;
pub mod repository;

pub use loader::{load_records, parse_records, LoadedDataset};
pub use repositories::LocalRepository;
pub use repository::{DatasetInfo, RepositoryError, RepositoryResult, RouteRepository};

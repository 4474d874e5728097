//! Repository trait for route record storage.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::RouteRecord;

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Metadata about the loaded dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Number of records in load order.
    pub record_count: usize,
    /// SHA-256 of the source document, when it came from one.
    pub checksum: Option<String>,
    /// Where the records were loaded from.
    pub source: Option<String>,
}

/// Read access to the route records.
///
/// Records are loaded once and never mutated, so implementations hand out a
/// shared slice instead of cloning on every request.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// Check if the repository is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// All records, in load order.
    async fn list_records(&self) -> RepositoryResult<Arc<[RouteRecord]>>;

    /// Metadata about the loaded dataset.
    async fn dataset_info(&self) -> RepositoryResult<DatasetInfo>;
}

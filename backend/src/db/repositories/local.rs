//! In-memory repository holding the records loaded at startup.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::db::loader::{self, LoadedDataset};
use crate::db::repository::{DatasetInfo, RepositoryResult, RouteRepository};
use crate::models::RouteRecord;

/// Immutable, shared store of route records.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    records: Arc<[RouteRecord]>,
    info: DatasetInfo,
}

impl LocalRepository {
    /// Repository over an in-memory list of records.
    pub fn new(records: Vec<RouteRecord>) -> Self {
        let info = DatasetInfo {
            record_count: records.len(),
            checksum: None,
            source: None,
        };
        Self {
            records: records.into(),
            info,
        }
    }

    /// Repository with no records; the dashboard renders empty.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn from_dataset(dataset: LoadedDataset) -> Self {
        Self {
            records: dataset.records.into(),
            info: dataset.info,
        }
    }

    pub fn from_json_str(content: &str) -> RepositoryResult<Self> {
        loader::parse_records(content).map(Self::from_dataset)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        loader::load_records(path).map(Self::from_dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl RouteRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn list_records(&self) -> RepositoryResult<Arc<[RouteRecord]>> {
        Ok(Arc::clone(&self.records))
    }

    async fn dataset_info(&self) -> RepositoryResult<DatasetInfo> {
        Ok(self.info.clone())
    }
}

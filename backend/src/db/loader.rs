//! Reads the consolidated analytics document.
//!
//! The document is a JSON object with an `analytics` array of route records.
//! Other top-level keys are ignored. Individual records are parsed leniently
//! (see [`RouteRecord`]), but a document without an `analytics` array is
//! rejected.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::checksum::calculate_checksum;
use super::repository::{DatasetInfo, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::RouteRecord;

#[derive(Debug, Deserialize)]
struct AnalyticsDocument {
    analytics: Vec<RouteRecord>,
}

/// Records plus metadata describing where they came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    pub records: Vec<RouteRecord>,
    pub info: DatasetInfo,
}

/// Parse an analytics document held in memory.
pub fn parse_records(content: &str) -> RepositoryResult<LoadedDataset> {
    let document: AnalyticsDocument = serde_json::from_str(content)
        .map_err(|e| RepositoryError::from(e).with_operation("parse_records"))?;

    Ok(LoadedDataset {
        info: DatasetInfo {
            record_count: document.analytics.len(),
            checksum: Some(calculate_checksum(content.as_bytes())),
            source: None,
        },
        records: document.analytics,
    })
}

/// Read and parse an analytics document from disk.
pub fn load_records<P: AsRef<Path>>(path: P) -> RepositoryResult<LoadedDataset> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        RepositoryError::load_with_context(
            e.to_string(),
            ErrorContext::new("load_records").with_source(path.display()),
        )
    })?;

    let mut dataset = parse_records(&content).map_err(|e| match e {
        RepositoryError::ParseError { message, context } => RepositoryError::ParseError {
            message,
            context: context.with_source(path.display()),
        },
        other => other,
    })?;
    dataset.info.source = Some(path.display().to_string());

    log::info!(
        "Loaded {} route records from {}",
        dataset.info.record_count,
        path.display()
    );
    Ok(dataset)
}

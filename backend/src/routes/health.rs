use serde::{Deserialize, Serialize};

/// Service health plus a fingerprint of the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "loaded", "empty" or an error description
    pub data: String,
    pub record_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

/// Route path for the health check
pub const HEALTH: &str = "/health";

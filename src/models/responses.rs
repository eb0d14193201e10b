use serde::{Deserialize, Serialize};

use crate::core::bands::{FabricToleranceBand, FabricType};

/// One entry of the fabric band listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricBandResponse {
    pub fabric: FabricType,
    #[serde(flatten)]
    pub band: FabricToleranceBand,
}

/// Response for the fabric band listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FabricsResponse {
    pub fabrics: Vec<FabricBandResponse>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

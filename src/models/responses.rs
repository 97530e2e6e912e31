use serde::{Deserialize, Serialize};

use crate::models::{Match, Pool};

/// Response for the build pools endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPoolsResponse {
    pub pools: Vec<Pool>,
    #[serde(rename = "totalShipments")]
    pub total_shipments: usize,
}

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub pools: Vec<Pool>,
    pub matches: Vec<Match>,
    #[serde(rename = "totalShipments")]
    pub total_shipments: usize,
    #[serde(rename = "totalCarriers")]
    pub total_carriers: usize,
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
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

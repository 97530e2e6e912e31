use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Carrier, MatchOptions, Shipment};

// The engine's cost is a deterministic function of input size, so the API
// bounds it by capping the input lists rather than by timing anything out.

/// Request to group shipments into pools
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BuildPoolsRequest {
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    #[serde(default)]
    pub options: Option<MatchOptions>,
}

/// Request to pool shipments and rank carriers against each pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub carriers: Vec<Carrier>,
    #[serde(default)]
    pub options: Option<MatchOptions>,
}

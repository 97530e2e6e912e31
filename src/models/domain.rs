use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
///
/// The engine assumes coordinates were already parsed into numeric form by
/// the caller (the app stores them as free-text "lat,lng" fields). Values
/// outside [-90,90]/[-180,180] are not rejected here; they produce
/// geometrically meaningless but well-defined results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Optional pickup/delivery time bounds. A missing bound means
/// "unconstrained" for overlap purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(rename = "readyAt", default)]
    pub ready_at: Option<DateTime<Utc>>,
    #[serde(rename = "dueBy", default)]
    pub due_by: Option<DateTime<Utc>>,
}

/// A shipment pending assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub pickup: Coordinate,
    pub drop: Coordinate,
    /// Cubic meters
    #[serde(default)]
    pub volume: Option<f64>,
    /// Kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// 0..1, 1 = highest. Carried for the caller; not used by the scorer.
    #[serde(default)]
    pub priority: Option<f64>,
    #[serde(flatten)]
    pub window: TimeWindow,
}

/// A carrier available for pool assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub id: String,
    #[serde(rename = "currentLocation")]
    pub current_location: Coordinate,
    /// Cubic meters; absent = unbounded
    #[serde(rename = "capacityVolume", default)]
    pub capacity_volume: Option<f64>,
    /// Kilograms; absent = unbounded
    #[serde(rename = "capacityWeight", default)]
    pub capacity_weight: Option<f64>,
    /// Max pickup radius from current location; absent = unbounded
    #[serde(rename = "serviceRadiusKm", default)]
    pub service_radius_km: Option<f64>,
    /// After this instant the carrier accepts no new pickups
    #[serde(rename = "availableUntil", default)]
    pub available_until: Option<DateTime<Utc>>,
}

/// A group of shipments compatible enough to be served by one vehicle.
///
/// Immutable once built. Member order is selection order and is significant
/// for reproducibility; the id is the member ids joined with `+`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: String,
    pub shipments: Vec<Shipment>,
    #[serde(rename = "totalVolume")]
    pub total_volume: f64,
    #[serde(rename = "totalWeight")]
    pub total_weight: f64,
    #[serde(rename = "pickupCentroid")]
    pub pickup_centroid: Coordinate,
    #[serde(rename = "dropCentroid")]
    pub drop_centroid: Coordinate,
    /// Circular mean of member bearings, [0,360)
    #[serde(rename = "bearingDeg")]
    pub bearing_deg: f64,
}

impl Pool {
    pub fn size(&self) -> usize {
        self.shipments.len()
    }
}

/// Scored carrier-pool pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "poolId")]
    pub pool_id: String,
    #[serde(rename = "carrierId")]
    pub carrier_id: String,
    /// 0..1
    pub score: f64,
    /// Human-readable contributing factors
    pub reasons: Vec<String>,
}

/// Tunable thresholds and weights for pooling and carrier scoring.
///
/// Every field falls back to its documented default independently when
/// absent from JSON; unknown keys are ignored. Resolved once at the start
/// of a call and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Max shipments per pool
    #[serde(rename = "maxPoolSize", default = "default_max_pool_size")]
    pub max_pool_size: usize,
    /// Pickup proximity join threshold in km
    #[serde(rename = "pickupJoinDistanceKm", default = "default_pickup_join_distance_km")]
    pub pickup_join_distance_km: f64,
    /// Minimum average pair score for a shipment to join a pool
    #[serde(rename = "minPairScore", default = "default_min_pair_score")]
    pub min_pair_score: f64,

    // Shipment pair weights
    #[serde(rename = "wPickupProximity", default = "default_w_pickup_proximity")]
    pub w_pickup_proximity: f64,
    #[serde(rename = "wRouteSimilarity", default = "default_w_route_similarity")]
    pub w_route_similarity: f64,
    #[serde(rename = "wTimeOverlap", default = "default_w_time_overlap")]
    pub w_time_overlap: f64,
    #[serde(rename = "wDropProximity", default = "default_w_drop_proximity")]
    pub w_drop_proximity: f64,

    // Carrier vs pool weights
    #[serde(rename = "wCarrierToPickupDist", default = "default_w_carrier_to_pickup_dist")]
    pub w_carrier_to_pickup_dist: f64,
    #[serde(rename = "wCapacityFit", default = "default_w_capacity_fit")]
    pub w_capacity_fit: f64,
    #[serde(rename = "wServiceRadius", default = "default_w_service_radius")]
    pub w_service_radius: f64,
    #[serde(rename = "wTimeFeasibility", default = "default_w_time_feasibility")]
    pub w_time_feasibility: f64,

    /// Distance at which the carrier-to-pickup score reaches 0
    #[serde(rename = "maxCarrierToPickupKm", default = "default_max_carrier_to_pickup_km")]
    pub max_carrier_to_pickup_km: f64,

    /// Carriers kept per pool
    #[serde(rename = "topK", default = "default_top_k")]
    pub top_k: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_pool_size: default_max_pool_size(),
            pickup_join_distance_km: default_pickup_join_distance_km(),
            min_pair_score: default_min_pair_score(),
            w_pickup_proximity: default_w_pickup_proximity(),
            w_route_similarity: default_w_route_similarity(),
            w_time_overlap: default_w_time_overlap(),
            w_drop_proximity: default_w_drop_proximity(),
            w_carrier_to_pickup_dist: default_w_carrier_to_pickup_dist(),
            w_capacity_fit: default_w_capacity_fit(),
            w_service_radius: default_w_service_radius(),
            w_time_feasibility: default_w_time_feasibility(),
            max_carrier_to_pickup_km: default_max_carrier_to_pickup_km(),
            top_k: default_top_k(),
        }
    }
}

fn default_max_pool_size() -> usize { 3 }
fn default_pickup_join_distance_km() -> f64 { 6.0 }
fn default_min_pair_score() -> f64 { 0.45 }
fn default_w_pickup_proximity() -> f64 { 0.4 }
fn default_w_route_similarity() -> f64 { 0.35 }
fn default_w_time_overlap() -> f64 { 0.15 }
fn default_w_drop_proximity() -> f64 { 0.1 }
fn default_w_carrier_to_pickup_dist() -> f64 { 0.45 }
fn default_w_capacity_fit() -> f64 { 0.3 }
fn default_w_service_radius() -> f64 { 0.1 }
fn default_w_time_feasibility() -> f64 { 0.15 }
fn default_max_carrier_to_pickup_km() -> f64 { 18.0 }
fn default_top_k() -> usize { 3 }

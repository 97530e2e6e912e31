// Core algorithm exports
pub mod carrier;
pub mod geo;
pub mod matcher;
pub mod pooling;
pub mod scoring;

pub use carrier::{score_carrier_for_pool, CarrierScore};
pub use geo::{angle_diff_deg, circular_mean_deg, haversine_km, initial_bearing_deg};
pub use matcher::{MatchResult, Matcher};
pub use pooling::cluster_shipments;
pub use scoring::score_shipment_pair;

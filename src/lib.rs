//! FreightPool Algo - shipment pooling and carrier matching service
//!
//! This library provides the pooling and matching engine used by the
//! FreightPool logistics marketplace. It greedily groups compatible
//! shipments into pools a single vehicle can serve, then ranks carriers
//! against each pool with a weighted multi-factor fitness score. The engine
//! is pure and deterministic; the surrounding app supplies shipment and
//! carrier records and consumes pools and matches as plain data.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    cluster_shipments, geo::haversine_km, score_carrier_for_pool, score_shipment_pair,
    MatchResult, Matcher,
};
pub use models::{
    BuildPoolsRequest, BuildPoolsResponse, Carrier, Coordinate, FindMatchesRequest,
    FindMatchesResponse, Match, MatchOptions, Pool, Shipment, TimeWindow,
};

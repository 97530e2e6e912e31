// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Carrier, Coordinate, Match, MatchOptions, Pool, Shipment, TimeWindow};
pub use requests::{BuildPoolsRequest, FindMatchesRequest};
pub use responses::{BuildPoolsResponse, ErrorResponse, FindMatchesResponse, HealthResponse};

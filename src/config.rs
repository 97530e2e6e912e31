use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::MatchOptions;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub pooling: PoolingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Pooling thresholds; defaults mirror [`MatchOptions`]
#[derive(Debug, Clone, Deserialize)]
pub struct PoolingSettings {
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: usize,
    #[serde(default = "default_pickup_join_distance_km")]
    pub pickup_join_distance_km: f64,
    #[serde(default = "default_min_pair_score")]
    pub min_pair_score: f64,
    #[serde(default = "default_max_carrier_to_pickup_km")]
    pub max_carrier_to_pickup_km: f64,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for PoolingSettings {
    fn default() -> Self {
        Self {
            max_pool_size: default_max_pool_size(),
            pickup_join_distance_km: default_pickup_join_distance_km(),
            min_pair_score: default_min_pair_score(),
            max_carrier_to_pickup_km: default_max_carrier_to_pickup_km(),
            top_k: default_top_k(),
        }
    }
}

fn default_max_pool_size() -> usize { 3 }
fn default_pickup_join_distance_km() -> f64 { 6.0 }
fn default_min_pair_score() -> f64 { 0.45 }
fn default_max_carrier_to_pickup_km() -> f64 { 18.0 }
fn default_top_k() -> usize { 3 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Scoring weights for shipment pairs and carrier fitness
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_pickup_proximity_weight")]
    pub pickup_proximity: f64,
    #[serde(default = "default_route_similarity_weight")]
    pub route_similarity: f64,
    #[serde(default = "default_time_overlap_weight")]
    pub time_overlap: f64,
    #[serde(default = "default_drop_proximity_weight")]
    pub drop_proximity: f64,
    #[serde(default = "default_carrier_to_pickup_dist_weight")]
    pub carrier_to_pickup_dist: f64,
    #[serde(default = "default_capacity_fit_weight")]
    pub capacity_fit: f64,
    #[serde(default = "default_service_radius_weight")]
    pub service_radius: f64,
    #[serde(default = "default_time_feasibility_weight")]
    pub time_feasibility: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            pickup_proximity: default_pickup_proximity_weight(),
            route_similarity: default_route_similarity_weight(),
            time_overlap: default_time_overlap_weight(),
            drop_proximity: default_drop_proximity_weight(),
            carrier_to_pickup_dist: default_carrier_to_pickup_dist_weight(),
            capacity_fit: default_capacity_fit_weight(),
            service_radius: default_service_radius_weight(),
            time_feasibility: default_time_feasibility_weight(),
        }
    }
}

fn default_pickup_proximity_weight() -> f64 { 0.4 }
fn default_route_similarity_weight() -> f64 { 0.35 }
fn default_time_overlap_weight() -> f64 { 0.15 }
fn default_drop_proximity_weight() -> f64 { 0.1 }
fn default_carrier_to_pickup_dist_weight() -> f64 { 0.45 }
fn default_capacity_fit_weight() -> f64 { 0.3 }
fn default_service_radius_weight() -> f64 { 0.1 }
fn default_time_feasibility_weight() -> f64 { 0.15 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with POOL_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local config file for development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g. POOL_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("POOL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("POOL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the configured thresholds and weights into engine options
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            max_pool_size: self.pooling.max_pool_size,
            pickup_join_distance_km: self.pooling.pickup_join_distance_km,
            min_pair_score: self.pooling.min_pair_score,
            w_pickup_proximity: self.scoring.weights.pickup_proximity,
            w_route_similarity: self.scoring.weights.route_similarity,
            w_time_overlap: self.scoring.weights.time_overlap,
            w_drop_proximity: self.scoring.weights.drop_proximity,
            w_carrier_to_pickup_dist: self.scoring.weights.carrier_to_pickup_dist,
            w_capacity_fit: self.scoring.weights.capacity_fit,
            w_service_radius: self.scoring.weights.service_radius,
            w_time_feasibility: self.scoring.weights.time_feasibility,
            max_carrier_to_pickup_km: self.pooling.max_carrier_to_pickup_km,
            top_k: self.pooling.top_k,
        }
    }
}

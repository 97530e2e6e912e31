use std::cmp::Ordering;

use crate::core::carrier::{score_carrier_for_pool, CarrierScore};
use crate::core::pooling::cluster_shipments;
use crate::models::{Carrier, Match, MatchOptions, Pool, Shipment};

/// Result of a full pooling-and-matching run
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub pools: Vec<Pool>,
    /// Per-pool top-K matches, merged and globally sorted by score descending
    pub matches: Vec<Match>,
    pub total_shipments: usize,
    pub total_carriers: usize,
}

/// Pooling and carrier-matching orchestrator.
///
/// Holds the options resolved for a run; the engine itself is stateless
/// between invocations. Pure computation throughout: no I/O, no retries,
/// and deterministic output for identical inputs and options.
#[derive(Debug, Clone)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn with_default_options() -> Self {
        Self {
            options: MatchOptions::default(),
        }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Group shipments into pools; see [`cluster_shipments`].
    ///
    /// Fewer than two shipments never fails: leftovers become singleton pools.
    pub fn cluster(&self, shipments: &[Shipment]) -> Vec<Pool> {
        cluster_shipments(shipments, &self.options)
    }

    /// Build pools, then rank every carrier against every pool.
    ///
    /// Carriers per pool are sorted by score descending (stable, so ties
    /// keep their input order) and cut to `top_k`; the surviving matches are
    /// merged into one list sorted globally by score descending, again
    /// stable. An empty carrier list yields pools with no matches.
    pub fn find_matches(&self, shipments: &[Shipment], carriers: &[Carrier]) -> MatchResult {
        let pools = self.cluster(shipments);

        let mut matches = Vec::new();
        for pool in &pools {
            let mut scored: Vec<Match> = carriers
                .iter()
                .map(|carrier| {
                    let CarrierScore { score, reasons } =
                        score_carrier_for_pool(carrier, pool, &self.options);
                    Match {
                        pool_id: pool.id.clone(),
                        carrier_id: carrier.id.clone(),
                        score,
                        reasons,
                    }
                })
                .collect();

            scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
            scored.truncate(self.options.top_k);
            matches.extend(scored);
        }

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        MatchResult {
            total_shipments: shipments.len(),
            total_carriers: carriers.len(),
            pools,
            matches,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_options()
    }
}

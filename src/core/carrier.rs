use crate::core::geo::haversine_km;
use crate::models::{Carrier, MatchOptions, Pool};

/// 2-hour grace window for late availability, in milliseconds
const TIME_GRACE_MS: f64 = 2.0 * 60.0 * 60.0 * 1000.0;

/// Carrier fitness for a pool: a 0-1 score plus the factors behind it
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Score how suitable a carrier is for an already-built pool (0-1).
///
/// Combines distance to the pool's pickup centroid, capacity fit (the
/// binding dimension of volume vs weight wins), service-radius feasibility,
/// and availability-cutoff feasibility. Unconstrained dimensions count as a
/// perfect fit and are left out of the reasons list; the distance figure is
/// always reported.
pub fn score_carrier_for_pool(carrier: &Carrier, pool: &Pool, opts: &MatchOptions) -> CarrierScore {
    let mut reasons = Vec::new();

    let d = haversine_km(&carrier.current_location, &pool.pickup_centroid);
    let dist_score =
        (1.0 - d / opts.max_carrier_to_pickup_km.max(f64::EPSILON)).clamp(0.0, 1.0);
    reasons.push(format!("distance {:.1} km", d));

    let capacity_score = capacity_fit(pool.total_volume, carrier.capacity_volume)
        .min(capacity_fit(pool.total_weight, carrier.capacity_weight));
    if carrier.capacity_volume.is_some() || carrier.capacity_weight.is_some() {
        reasons.push(format!("capacity {:.0}%", capacity_score * 100.0));
    }

    let service_score = match carrier.service_radius_km {
        None => 1.0,
        Some(radius) => {
            reasons.push(format!("service radius {} km", radius));
            if d <= radius {
                1.0
            } else {
                // Linear decay; zero once the overage equals the radius
                (1.0 - (d - radius) / radius.max(1.0)).clamp(0.0, 1.0)
            }
        }
    };

    let time_score = match carrier.available_until {
        None => 1.0,
        Some(cutoff) => {
            let cutoff_ms = cutoff.timestamp_millis();
            // A shipment without a ready-at is treated as just barely fine
            // rather than penalizing missing data.
            let earliest_ready = pool
                .shipments
                .iter()
                .map(|s| s.window.ready_at.map_or(cutoff_ms - 1, |t| t.timestamp_millis()))
                .min()
                .unwrap_or(cutoff_ms - 1);
            let score = if earliest_ready <= cutoff_ms {
                1.0
            } else {
                (1.0 - (earliest_ready - cutoff_ms) as f64 / TIME_GRACE_MS).clamp(0.0, 1.0)
            };
            reasons.push(format!("time {:.0}%", score * 100.0));
            score
        }
    };

    let score = (opts.w_carrier_to_pickup_dist * dist_score
        + opts.w_capacity_fit * capacity_score
        + opts.w_service_radius * service_score
        + opts.w_time_feasibility * time_score)
        .clamp(0.0, 1.0);

    CarrierScore { score, reasons }
}

/// Fit of one capacity dimension: 1 when unconstrained or within capacity,
/// decaying linearly to 0 once the overage reaches the capacity itself.
#[inline]
fn capacity_fit(pool_total: f64, capacity: Option<f64>) -> f64 {
    match capacity {
        None => 1.0,
        Some(cap) => (1.0 - (pool_total - cap).max(0.0) / cap.max(1.0)).clamp(0.0, 1.0),
    }
}

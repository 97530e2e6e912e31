use crate::core::geo::{circular_mean_deg, initial_bearing_deg};
use crate::core::scoring::score_shipment_pair;
use crate::models::{Coordinate, MatchOptions, Pool, Shipment};

/// Greedily group shipments into pools of at most `max_pool_size` members.
///
/// Shipments are processed in the order given; the engine never resorts the
/// input. Each unconsumed shipment seeds a new pool, which then grows by
/// repeatedly taking the remaining shipment with the highest *average* pair
/// score against every current member, as long as that average clears
/// `min_pair_score`. Ties go to the candidate that appears first in the
/// original input order, which makes runs reproducible.
///
/// Deterministic greedy heuristic, not globally optimal. O(n² × maxPoolSize)
/// in the worst case; fine for tens to low hundreds of shipments per run.
///
/// Singletons become pools of size 1; an empty input yields no pools.
pub fn cluster_shipments(shipments: &[Shipment], opts: &MatchOptions) -> Vec<Pool> {
    let mut consumed = vec![false; shipments.len()];
    let mut pools = Vec::new();

    for seed in 0..shipments.len() {
        if consumed[seed] {
            continue;
        }
        consumed[seed] = true;
        let mut members = vec![seed];

        while members.len() < opts.max_pool_size {
            let mut best: Option<(usize, f64)> = None;
            for (idx, candidate) in shipments.iter().enumerate() {
                if consumed[idx] {
                    continue;
                }
                let sum: f64 = members
                    .iter()
                    .map(|&m| score_shipment_pair(&shipments[m], candidate, opts))
                    .sum();
                let avg = sum / members.len() as f64;
                // Strict > keeps the first-encountered candidate on ties
                if avg > best.map_or(0.0, |(_, s)| s) {
                    best = Some((idx, avg));
                }
            }
            match best {
                Some((idx, score)) if score >= opts.min_pair_score => {
                    members.push(idx);
                    consumed[idx] = true;
                }
                _ => break,
            }
        }

        pools.push(build_pool(members.iter().map(|&i| shipments[i].clone()).collect()));
    }

    pools
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Close a pool: sum volumes/weights, average the pickup and drop points,
/// and take the circular mean of the per-shipment bearings.
fn build_pool(shipments: Vec<Shipment>) -> Pool {
    let total_volume = shipments.iter().filter_map(|s| s.volume).sum();
    let total_weight = shipments.iter().filter_map(|s| s.weight).sum();

    let pickup_centroid = Coordinate {
        lat: mean(shipments.iter().map(|s| s.pickup.lat)),
        lng: mean(shipments.iter().map(|s| s.pickup.lng)),
    };
    let drop_centroid = Coordinate {
        lat: mean(shipments.iter().map(|s| s.drop.lat)),
        lng: mean(shipments.iter().map(|s| s.drop.lng)),
    };

    let bearings: Vec<f64> = shipments
        .iter()
        .map(|s| initial_bearing_deg(&s.pickup, &s.drop))
        .collect();
    let bearing_deg = circular_mean_deg(&bearings);

    let id = shipments
        .iter()
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join("+");

    Pool {
        id,
        shipments,
        total_volume,
        total_weight,
        pickup_centroid,
        drop_centroid,
        bearing_deg,
    }
}

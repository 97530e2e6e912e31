use crate::core::geo::{angle_diff_deg, haversine_km, initial_bearing_deg};
use crate::models::{MatchOptions, Shipment, TimeWindow};

/// Score how well two shipments fit into the same pool (0-1).
///
/// Weighted combination of four signals:
/// - pickup proximity: linear decay to 0 at `pickup_join_distance_km`
/// - route similarity: 1.0 for identical bearings, 0.0 for opposite
/// - time overlap: shared fraction of the two delivery windows
/// - drop proximity: linear decay to 0 at twice the pickup join radius
///
/// The value is a pairwise compatibility signal, not a probability; it has
/// no meaning in isolation.
pub fn score_shipment_pair(a: &Shipment, b: &Shipment, opts: &MatchOptions) -> f64 {
    let join_km = opts.pickup_join_distance_km.max(f64::EPSILON);

    let d_pickup = haversine_km(&a.pickup, &b.pickup);
    let pickup_score = (1.0 - d_pickup / join_km).clamp(0.0, 1.0);

    let bearing_a = initial_bearing_deg(&a.pickup, &a.drop);
    let bearing_b = initial_bearing_deg(&b.pickup, &b.drop);
    let route_similarity = (1.0 - angle_diff_deg(bearing_a, bearing_b) / 180.0).clamp(0.0, 1.0);

    // Drops may sit twice as far apart as pickups before penalizing to 0
    let d_drop = haversine_km(&a.drop, &b.drop);
    let drop_score = (1.0 - d_drop / (join_km * 2.0)).clamp(0.0, 1.0);

    let time_score = time_overlap(&a.window, &b.window);

    let total = opts.w_pickup_proximity * pickup_score
        + opts.w_route_similarity * route_similarity
        + opts.w_time_overlap * time_score
        + opts.w_drop_proximity * drop_score;

    total.clamp(0.0, 1.0)
}

/// Fraction of overlap between two time windows (0-1).
///
/// Any missing bound on either window is treated as fully flexible and
/// scores 1. This can mask a conflict when only one side declares a due-by;
/// kept as existing heuristic behavior pending product clarification.
pub fn time_overlap(a: &TimeWindow, b: &TimeWindow) -> f64 {
    let (a_start, a_end, b_start, b_end) = match (a.ready_at, a.due_by, b.ready_at, b.due_by) {
        (Some(a0), Some(a1), Some(b0), Some(b1)) => (
            a0.timestamp_millis(),
            a1.timestamp_millis(),
            b0.timestamp_millis(),
            b1.timestamp_millis(),
        ),
        _ => return 1.0,
    };

    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    if end <= start {
        return 0.0;
    }

    // Minimum denominator of 1ms keeps zero-duration windows from dividing by 0
    let total = (a_end - a_start).max(b_end - b_start).max(1);
    ((end - start) as f64 / total as f64).clamp(0.0, 1.0)
}

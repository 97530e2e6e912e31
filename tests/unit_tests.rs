// Unit tests for FreightPool Algo

use chrono::{TimeZone, Utc};
use freightpool_algo::core::{
    angle_diff_deg, circular_mean_deg, haversine_km, initial_bearing_deg,
    score_carrier_for_pool, score_shipment_pair,
};
use freightpool_algo::{Carrier, Coordinate, MatchOptions, Pool, Shipment, TimeWindow};

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate { lat, lng }
}

fn shipment(id: &str, pickup: (f64, f64), drop: (f64, f64)) -> Shipment {
    Shipment {
        id: id.to_string(),
        pickup: coord(pickup.0, pickup.1),
        drop: coord(drop.0, drop.1),
        volume: None,
        weight: None,
        priority: None,
        window: TimeWindow::default(),
    }
}

fn singleton_pool(s: Shipment, total_volume: f64) -> Pool {
    Pool {
        id: s.id.clone(),
        pickup_centroid: s.pickup,
        drop_centroid: s.drop,
        bearing_deg: initial_bearing_deg(&s.pickup, &s.drop),
        total_volume,
        total_weight: 0.0,
        shipments: vec![s],
    }
}

#[test]
fn test_haversine_distance_zero() {
    let a = coord(40.7128, -74.0060);
    assert_eq!(haversine_km(&a, &a), 0.0);
}

#[test]
fn test_haversine_symmetry() {
    let points = [
        (coord(40.7128, -74.0060), coord(34.0522, -118.2437)),
        (coord(28.6448, 77.2167), coord(28.5355, 77.3910)),
        (coord(-33.8688, 151.2093), coord(51.5074, -0.1278)),
    ];
    for (a, b) in &points {
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }
}

#[test]
fn test_haversine_delhi_pickups() {
    // The two canonical pickups are roughly 0.6 km apart
    let distance = haversine_km(&coord(28.6448, 77.2167), &coord(28.6500, 77.2200));
    assert!(distance > 0.4 && distance < 0.9, "expected ~0.6km, got {}", distance);
}

#[test]
fn test_bearing_wraparound() {
    assert_eq!(angle_diff_deg(350.0, 10.0), 20.0);
    assert_eq!(angle_diff_deg(10.0, 350.0), 20.0);
}

#[test]
fn test_circular_mean_near_north() {
    let mean = circular_mean_deg(&[355.0, 5.0]);
    assert!(mean < 0.01 || mean > 359.99, "expected ~0, got {}", mean);
}

#[test]
fn test_pair_score_bounds_over_varied_inputs() {
    let opts = MatchOptions::default();
    let cases = [
        ((28.64, 77.21), (28.53, 77.39), (28.65, 77.22), (28.55, 77.39)),
        ((0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0)),
        ((40.71, -74.00), (34.05, -118.24), (51.50, -0.12), (48.85, 2.35)),
        ((-33.86, 151.20), (-37.81, 144.96), (-33.87, 151.21), (-37.80, 144.95)),
    ];

    for (ap, ad, bp, bd) in cases {
        let a = shipment("a", ap, ad);
        let b = shipment("b", bp, bd);
        let score = score_shipment_pair(&a, &b, &opts);
        assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }
}

#[test]
fn test_identical_shipments_score_near_max() {
    // Same pickups, drops, and bearings, no windows: every component is 1
    // and the weights sum to 1
    let a = shipment("a", (28.64, 77.21), (28.53, 77.39));
    let b = shipment("b", (28.64, 77.21), (28.53, 77.39));

    let score = score_shipment_pair(&a, &b, &MatchOptions::default());
    assert!((score - 1.0).abs() < 1e-9, "expected 1.0, got {}", score);
}

#[test]
fn test_time_windows_affect_pair_score() {
    let base = shipment("a", (28.64, 77.21), (28.53, 77.39));

    let mut morning = shipment("b", (28.65, 77.22), (28.55, 77.39));
    morning.window = TimeWindow {
        ready_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()),
        due_by: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
    };

    let mut base_morning = base.clone();
    base_morning.window = morning.window;

    let mut base_evening = base.clone();
    base_evening.window = TimeWindow {
        ready_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()),
        due_by: Some(Utc.with_ymd_and_hms(2025, 6, 1, 22, 0, 0).unwrap()),
    };

    let opts = MatchOptions::default();
    let overlapping = score_shipment_pair(&base_morning, &morning, &opts);
    let disjoint = score_shipment_pair(&base_evening, &morning, &opts);

    assert!(overlapping > disjoint);
}

#[test]
fn test_carrier_score_bounds() {
    let opts = MatchOptions::default();
    let pool = singleton_pool(shipment("S1", (28.64, 77.21), (28.53, 77.39)), 5.0);

    let carriers = [
        Carrier {
            id: "near".to_string(),
            current_location: coord(28.64, 77.21),
            capacity_volume: Some(10.0),
            capacity_weight: None,
            service_radius_km: Some(25.0),
            available_until: None,
        },
        Carrier {
            id: "far".to_string(),
            current_location: coord(40.71, -74.00),
            capacity_volume: Some(0.0),
            capacity_weight: Some(0.0),
            service_radius_km: Some(0.0),
            available_until: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
        },
    ];

    for carrier in &carriers {
        let result = score_carrier_for_pool(carrier, &pool, &opts);
        assert!(
            (0.0..=1.0).contains(&result.score),
            "score {} out of range for {}",
            result.score,
            carrier.id
        );
        assert!(result.score.is_finite());
    }
}

#[test]
fn test_overloaded_carrier_capacity_zero() {
    // capacityVolume=1 against totalVolume=5: overage >= capacity, so the
    // capacity component is exactly 0 and only the other factors remain
    let opts = MatchOptions {
        w_carrier_to_pickup_dist: 0.0,
        w_service_radius: 0.0,
        w_time_feasibility: 0.0,
        ..MatchOptions::default()
    };
    let pool = singleton_pool(shipment("S1", (28.64, 77.21), (28.53, 77.39)), 5.0);
    let carrier = Carrier {
        id: "C1".to_string(),
        current_location: coord(28.64, 77.21),
        capacity_volume: Some(1.0),
        capacity_weight: None,
        service_radius_km: None,
        available_until: None,
    };

    let result = score_carrier_for_pool(&carrier, &pool, &opts);
    assert_eq!(result.score, 0.0);
    assert!(result.reasons.iter().any(|r| r == "capacity 0%"));
}

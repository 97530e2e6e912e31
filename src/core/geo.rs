use crate::models::Coordinate;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle (Haversine) distance between two coordinates
/// in kilometers.
///
/// Symmetric in its arguments; zero for coincident points.
#[inline]
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let sin_d_lat = ((b.lat - a.lat).to_radians() / 2.0).sin();
    let sin_d_lng = ((b.lng - a.lng).to_radians() / 2.0).sin();

    let h = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lng * sin_d_lng;

    // Floating-point error can push h a hair above 1 for near-antipodal
    // points; clamp before the square root reaches asin.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Calculate the initial compass bearing from one coordinate to another,
/// in degrees normalized to [0,360).
///
/// Not symmetric. Coincident points have no well-defined direction; this
/// returns 0 by convention (atan2(0, 0) == 0) rather than special-casing.
#[inline]
pub fn initial_bearing_deg(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Smallest absolute angular difference between two bearings, [0,180].
///
/// Unwraps across the 0/360 boundary: diff(350, 10) == 20, not 340.
#[inline]
pub fn angle_diff_deg(a: f64, b: f64) -> f64 {
    ((a - b + 540.0).rem_euclid(360.0) - 180.0).abs()
}

/// Mean direction of a set of bearings, computed via vector (cosine/sine)
/// averaging so that e.g. [350, 10] averages to 0 rather than 180.
///
/// Returns 0 for an empty slice.
pub fn circular_mean_deg(bearings: &[f64]) -> f64 {
    if bearings.is_empty() {
        return 0.0;
    }
    let n = bearings.len() as f64;
    let x: f64 = bearings.iter().map(|b| b.to_radians().cos()).sum::<f64>() / n;
    let y: f64 = bearings.iter().map(|b| b.to_radians().sin()).sum::<f64>() / n;
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate { lat, lng }
    }

    #[test]
    fn test_haversine_known_distance() {
        // London to Paris is approximately 344 km
        let london = coord(51.5074, -0.1278);
        let paris = coord(48.8566, 2.3522);

        let distance = haversine_km(&london, &paris);
        assert!((distance - 344.0).abs() < 10.0, "expected ~344km, got {}", distance);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = coord(28.6448, 77.2167);
        let b = coord(28.5355, 77.3910);

        assert_eq!(haversine_km(&a, &b), haversine_km(&b, &a));
    }

    #[test]
    fn test_haversine_zero_for_coincident() {
        let a = coord(40.7128, -74.0060);
        assert_eq!(haversine_km(&a, &a), 0.0);
    }

    #[test]
    fn test_haversine_antipodal_does_not_nan() {
        // Near-antipodal points exercise the sqrt clamp
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 180.0);

        let distance = haversine_km(&a, &b);
        assert!(distance.is_finite());
        // Half the Earth's circumference, ~20015 km
        assert!((distance - 20015.0).abs() < 10.0);
    }

    #[test]
    fn test_bearing_due_north() {
        let bearing = initial_bearing_deg(&coord(0.0, 0.0), &coord(1.0, 0.0));
        assert!(bearing.abs() < 0.01, "expected ~0, got {}", bearing);
    }

    #[test]
    fn test_bearing_due_east() {
        let bearing = initial_bearing_deg(&coord(0.0, 0.0), &coord(0.0, 1.0));
        assert!((bearing - 90.0).abs() < 0.01, "expected ~90, got {}", bearing);
    }

    #[test]
    fn test_bearing_normalized_range() {
        let bearing = initial_bearing_deg(&coord(1.0, 1.0), &coord(0.0, 0.0));
        assert!((0.0..360.0).contains(&bearing));
    }

    #[test]
    fn test_bearing_coincident_is_zero() {
        let a = coord(28.65, 77.22);
        assert_eq!(initial_bearing_deg(&a, &a), 0.0);
    }

    #[test]
    fn test_angle_diff_wraparound() {
        assert_eq!(angle_diff_deg(350.0, 10.0), 20.0);
        assert_eq!(angle_diff_deg(10.0, 350.0), 20.0);
    }

    #[test]
    fn test_angle_diff_range() {
        assert_eq!(angle_diff_deg(0.0, 180.0), 180.0);
        assert_eq!(angle_diff_deg(90.0, 90.0), 0.0);
        assert_eq!(angle_diff_deg(0.0, 270.0), 90.0);
    }

    #[test]
    fn test_circular_mean_wraparound() {
        // Naive arithmetic mean of [350, 10] is 180; the circular mean is 0
        let mean = circular_mean_deg(&[350.0, 10.0]);
        assert!(mean < 0.01 || mean > 359.99, "expected ~0, got {}", mean);
    }

    #[test]
    fn test_circular_mean_simple() {
        let mean = circular_mean_deg(&[80.0, 100.0]);
        assert!((mean - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_circular_mean_empty() {
        assert_eq!(circular_mean_deg(&[]), 0.0);
    }
}

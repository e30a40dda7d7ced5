//! Great-circle distance between coordinates.
//!
//! Uses the haversine formula on a spherical Earth. This is a straight-line
//! approximation: it ignores the road network entirely.

use crate::domain::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres.
///
/// Always finite and non-negative; identical points give 0.
///
/// # Examples
///
/// ```
/// use route_server::domain::Coordinate;
/// use route_server::estimate::distance_km;
///
/// let a = Coordinate::new(20.2961, 85.8245).unwrap();
/// assert_eq!(distance_km(&a, &a), 0.0);
/// ```
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lng = (b.lng() - a.lng()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Format a distance for display, e.g. "6.6 km".
pub fn format_distance(km: f64) -> String {
    format!("{km:.1} km")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lng)| Coordinate::new(lat, lng).unwrap())
    }

    proptest! {
        /// Distance does not depend on direction
        #[test]
        fn symmetric(a in coordinate(), b in coordinate()) {
            let ab = distance_km(&a, &b);
            let ba = distance_km(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
        }

        /// A point is zero distance from itself
        #[test]
        fn identity(a in coordinate()) {
            prop_assert_eq!(distance_km(&a, &a), 0.0);
        }

        /// Never negative and never more than half the circumference
        #[test]
        fn bounded(a in coordinate(), b in coordinate()) {
            let d = distance_km(&a, &b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}

//! Great-circle distance.

use serde::{Deserialize, Serialize};

use crate::config::EARTH_RADIUS_KM;

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance between two points, rounded to the nearest kilometre.
///
/// No validation is performed: non-finite input yields `NaN`.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_KM * c).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DHAKA: GeoPoint = GeoPoint::new(23.8103, 90.4125);
    const CHATTOGRAM: GeoPoint = GeoPoint::new(22.3569, 91.7832);

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_km(DHAKA, DHAKA), 0.0);
    }

    #[test]
    fn test_dhaka_to_chattogram() {
        // Roughly 213 km as the crow flies.
        let d = distance_km(DHAKA, CHATTOGRAM);
        assert!((210.0..=217.0).contains(&d), "got {d}");
        assert_eq!(d.fract(), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let bad = GeoPoint::new(f64::NAN, 90.0);
        assert!(distance_km(bad, DHAKA).is_nan());
    }

    proptest! {
        #[test]
        fn test_distance_to_self_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let p = GeoPoint::new(lat, lon);
            prop_assert_eq!(distance_km(p, p), 0.0);
        }

        #[test]
        fn test_distance_is_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = GeoPoint::new(lat1, lon1);
            let b = GeoPoint::new(lat2, lon2);
            prop_assert_eq!(distance_km(a, b), distance_km(b, a));
        }
    }
}

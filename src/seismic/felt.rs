//! Felt-magnitude model.
//!
//! Linear attenuation: one point of magnitude per 150 km of distance and per
//! 80 km of depth. An explainable approximation of perceived intensity, not a
//! ground-motion law.

use crate::config::{DEPTH_ATTENUATION_KM, DISTANCE_ATTENUATION_KM, MIN_FELT_MAGNITUDE};

/// Magnitude after attenuation, before flooring and rounding.
pub fn attenuated_magnitude(original_mag: f64, distance_km: f64, depth_km: f64) -> f64 {
    original_mag - distance_km / DISTANCE_ATTENUATION_KM - depth_km / DEPTH_ATTENUATION_KM
}

/// Felt magnitude at `distance_km` from an event `depth_km` deep.
///
/// Floored at 0.1 and rounded to one decimal place. `NaN` input yields `NaN`.
pub fn felt_magnitude(original_mag: f64, distance_km: f64, depth_km: f64) -> f64 {
    let raw = attenuated_magnitude(original_mag, distance_km, depth_km);
    let floored = if raw < MIN_FELT_MAGNITUDE {
        MIN_FELT_MAGNITUDE
    } else {
        raw
    };
    round_to_tenth(floored)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_epicenter_at_city() {
        // 5.0 - 0 - 10/80 = 4.875
        assert_eq!(felt_magnitude(5.0, 0.0, 10.0), 4.9);
    }

    #[test]
    fn test_calibration_point() {
        // 150 km away and 80 km deep loses two points.
        assert_eq!(felt_magnitude(5.0, 150.0, 80.0), 3.0);
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(attenuated_magnitude(3.0, 300.0, 0.0), 1.0);
        assert!(attenuated_magnitude(3.0, 301.0, 0.0) < 1.0);
    }

    #[test]
    fn test_floor() {
        assert_eq!(felt_magnitude(2.0, 5000.0, 600.0), 0.1);
        assert_eq!(felt_magnitude(-3.0, 0.0, 0.0), 0.1);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(felt_magnitude(f64::NAN, 0.0, 0.0).is_nan());
        assert!(felt_magnitude(5.0, f64::NAN, 0.0).is_nan());
    }

    proptest! {
        #[test]
        fn test_no_attenuation_at_origin(m in 0.1f64..10.0) {
            prop_assert_eq!(felt_magnitude(m, 0.0, 0.0), round_to_tenth(m));
        }

        #[test]
        fn test_attenuation_never_amplifies(
            tenths in 1u32..100,
            d in 0.0f64..5000.0,
            k in 0.0f64..700.0,
        ) {
            let m = tenths as f64 / 10.0;
            prop_assert!(felt_magnitude(m, d, k) <= m);
        }

        #[test]
        fn test_never_below_floor(
            m in -10.0f64..10.0,
            d in 0.0f64..20000.0,
            k in 0.0f64..700.0,
        ) {
            prop_assert!(felt_magnitude(m, d, k) >= MIN_FELT_MAGNITUDE);
        }
    }
}

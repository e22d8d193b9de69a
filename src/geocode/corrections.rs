//! Hand-curated name corrections for the primary geocoder.
//!
//! Each entry patches one confirmed provider inaccuracy: when the provider
//! reports `reported` for a point strictly inside the box, `corrected` is
//! used instead. This is a data patch, not a rule; add entries only for
//! verified misreports.

use crate::geo::GeoPoint;

/// One (name, bounding box) correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameCorrection {
    pub reported: &'static str,
    pub corrected: &'static str,
    /// Exclusive latitude bounds
    pub lat_range: (f64, f64),
    /// Exclusive longitude bounds
    pub lon_range: (f64, f64),
}

impl NameCorrection {
    fn applies_to(&self, name: &str, point: GeoPoint) -> bool {
        name == self.reported
            && point.latitude > self.lat_range.0
            && point.latitude < self.lat_range.1
            && point.longitude > self.lon_range.0
            && point.longitude < self.lon_range.1
    }
}

/// Known corrections.
pub const KNOWN_CORRECTIONS: &[NameCorrection] = &[
    // Nominatim labels the southern Mymensingh city area as Jamalpur.
    NameCorrection {
        reported: "Jamalpur",
        corrected: "Mymensingh",
        lat_range: (24.6, 24.85),
        lon_range: (90.3, 90.5),
    },
];

/// Returns the corrected name for `name` at `point`, or `name` unchanged.
pub fn apply_corrections(name: String, point: GeoPoint, table: &[NameCorrection]) -> String {
    match table.iter().find(|c| c.applies_to(&name, point)) {
        Some(correction) => {
            log::debug!(
                "Correcting geocoder name '{}' to '{}' at ({}, {})",
                name,
                correction.corrected,
                point.latitude,
                point.longitude
            );
            correction.corrected.to_string()
        }
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jamalpur_inside_box_is_corrected() {
        let name = apply_corrections(
            "Jamalpur".to_string(),
            GeoPoint::new(24.75, 90.41),
            KNOWN_CORRECTIONS,
        );
        assert_eq!(name, "Mymensingh");
    }

    #[test]
    fn test_jamalpur_outside_box_is_kept() {
        // Jamalpur district headquarters.
        let name = apply_corrections(
            "Jamalpur".to_string(),
            GeoPoint::new(24.9197, 89.9454),
            KNOWN_CORRECTIONS,
        );
        assert_eq!(name, "Jamalpur");
    }

    #[test]
    fn test_box_edges_are_exclusive() {
        let name = apply_corrections(
            "Jamalpur".to_string(),
            GeoPoint::new(24.6, 90.4),
            KNOWN_CORRECTIONS,
        );
        assert_eq!(name, "Jamalpur");
    }

    #[test]
    fn test_other_names_untouched() {
        let name = apply_corrections(
            "Sherpur".to_string(),
            GeoPoint::new(24.75, 90.41),
            KNOWN_CORRECTIONS,
        );
        assert_eq!(name, "Sherpur");
    }
}

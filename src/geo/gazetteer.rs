//! Compiled-in reference tables.
//!
//! `MAJOR_CITIES` is used to attribute earthquakes; `DISTRICTS` is the
//! geocoding fallback and the search index. Both are ordered: ties in a
//! nearest search resolve to the earlier entry.

use serde::Serialize;

use super::distance::GeoPoint;
use super::nearest::Located;

/// A named reference location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceCity {
    pub name: &'static str,
    pub location: GeoPoint,
}

impl ReferenceCity {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            location: GeoPoint::new(latitude, longitude),
        }
    }
}

impl Located for ReferenceCity {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

/// Divisional headquarters used for felt-magnitude attribution.
pub const MAJOR_CITIES: &[ReferenceCity] = &[
    ReferenceCity::new("Dhaka", 23.8103, 90.4125),
    ReferenceCity::new("Chattogram", 22.3569, 91.7832),
    ReferenceCity::new("Sylhet", 24.8949, 91.8687),
    ReferenceCity::new("Rajshahi", 24.3745, 88.6042),
    ReferenceCity::new("Khulna", 22.8456, 89.5403),
    ReferenceCity::new("Rangpur", 25.7439, 89.2752),
];

/// District gazetteer.
pub const DISTRICTS: &[ReferenceCity] = &[
    ReferenceCity::new("Dhaka", 23.8103, 90.4125),
    ReferenceCity::new("Gazipur", 23.9989, 90.4264),
    ReferenceCity::new("Chittagong", 22.3569, 91.7832),
    ReferenceCity::new("Rajshahi", 24.3745, 88.6042),
    ReferenceCity::new("Khulna", 22.8456, 89.5403),
    ReferenceCity::new("Sylhet", 24.8949, 91.8687),
    ReferenceCity::new("Barisal", 22.7010, 90.3535),
    ReferenceCity::new("Rangpur", 25.7439, 89.2752),
    ReferenceCity::new("Mymensingh", 24.7471, 90.4203),
    ReferenceCity::new("Cumilla", 23.4607, 91.1809),
    ReferenceCity::new("Narayanganj", 23.6238, 90.5000),
    ReferenceCity::new("Tangail", 24.2513, 89.9167),
    ReferenceCity::new("Faridpur", 23.6071, 89.8429),
    ReferenceCity::new("Bogura", 24.8481, 89.3730),
    ReferenceCity::new("Kushtia", 23.9013, 89.1204),
    ReferenceCity::new("Jessore", 23.1664, 89.2100),
    ReferenceCity::new("Dinajpur", 25.6217, 88.6354),
    ReferenceCity::new("Noakhali", 22.8696, 91.0993),
    ReferenceCity::new("Feni", 23.0159, 91.3976),
    ReferenceCity::new("Brahmanbaria", 23.9571, 91.1167),
    ReferenceCity::new("Chandpur", 23.2333, 90.6500),
    ReferenceCity::new("Lakshmipur", 22.9429, 90.8411),
    ReferenceCity::new("Pabna", 24.0064, 89.2381),
    ReferenceCity::new("Sirajganj", 24.4534, 89.7077),
    ReferenceCity::new("Naogaon", 24.8109, 88.9414),
    ReferenceCity::new("Natore", 24.4111, 88.9911),
    ReferenceCity::new("Joypurhat", 25.1011, 89.0225),
    ReferenceCity::new("Chapai Nawabganj", 24.5965, 88.2707),
    ReferenceCity::new("Panchagarh", 26.3333, 88.5500),
    ReferenceCity::new("Thakurgaon", 26.0333, 88.4667),
    ReferenceCity::new("Nilphamari", 25.9310, 88.8560),
    ReferenceCity::new("Lalmonirhat", 25.9167, 89.4500),
    ReferenceCity::new("Kurigram", 25.8054, 89.6361),
    ReferenceCity::new("Gaibandha", 25.3288, 89.5422),
    ReferenceCity::new("Sherpur", 25.0189, 90.0175),
    ReferenceCity::new("Jamalpur", 24.9197, 89.9454),
    ReferenceCity::new("Netrokona", 24.8705, 90.7273),
    ReferenceCity::new("Kishoreganj", 24.4449, 90.7766),
    ReferenceCity::new("Manikganj", 23.8644, 90.0047),
    ReferenceCity::new("Munshiganj", 23.5422, 90.5305),
    ReferenceCity::new("Rajbari", 23.7574, 89.6444),
    ReferenceCity::new("Madaripur", 23.1641, 90.1896),
    ReferenceCity::new("Gopalganj", 23.0059, 89.8267),
    ReferenceCity::new("Shariatpur", 23.2423, 90.4348),
    ReferenceCity::new("Satkhira", 22.7185, 89.0710),
    ReferenceCity::new("Bagerhat", 22.6516, 89.7859),
    ReferenceCity::new("Narail", 23.1725, 89.5126),
    ReferenceCity::new("Magura", 23.4875, 89.4192),
    ReferenceCity::new("Meherpur", 23.7622, 88.6318),
    ReferenceCity::new("Chuadanga", 23.6401, 88.8418),
    ReferenceCity::new("Jhenaidah", 23.5450, 89.1726),
    ReferenceCity::new("Bhola", 22.6859, 90.6483),
    ReferenceCity::new("Patuakhali", 22.3596, 90.3297),
    ReferenceCity::new("Pirojpur", 22.5841, 89.9720),
    ReferenceCity::new("Jhalokati", 22.6422, 90.2003),
    ReferenceCity::new("Barguna", 22.1591, 90.1121),
    ReferenceCity::new("Cox's Bazar", 21.4272, 92.0058),
    ReferenceCity::new("Bandarban", 22.1953, 92.2184),
    ReferenceCity::new("Rangamati", 22.6547, 92.1747),
    ReferenceCity::new("Khagrachhari", 23.1192, 91.9841),
    ReferenceCity::new("Maulvibazar", 24.4829, 91.7476),
    ReferenceCity::new("Habiganj", 24.3749, 91.4133),
    ReferenceCity::new("Sunamganj", 25.0658, 91.3950),
];

/// Finds the first district whose name contains `query`, ignoring case.
///
/// Blank queries match nothing.
pub fn search_district(query: &str) -> Option<&'static ReferenceCity> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    DISTRICTS
        .iter()
        .find(|d| d.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(MAJOR_CITIES.len(), 6);
        assert!(DISTRICTS.len() >= 60);
        assert_eq!(MAJOR_CITIES[0].name, "Dhaka");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let found = search_district("SYLHET").unwrap();
        assert_eq!(found.name, "Sylhet");
    }

    #[test]
    fn test_search_substring_first_match() {
        // "pur" first appears in Gazipur.
        assert_eq!(search_district("pur").unwrap().name, "Gazipur");
        assert_eq!(search_district("  cox ").unwrap().name, "Cox's Bazar");
    }

    #[test]
    fn test_search_blank_and_unknown() {
        assert!(search_district("").is_none());
        assert!(search_district("   ").is_none());
        assert!(search_district("Kathmandu").is_none());
    }
}

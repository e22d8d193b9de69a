//! Geographic primitives.
//!
//! This module provides:
//! - `GeoPoint` and the haversine `distance_km`
//! - A generic nearest-candidate search over `Located` values
//! - The compiled-in major-city and district tables

mod distance;
mod gazetteer;
mod nearest;

// Re-export public API
pub use distance::{distance_km, GeoPoint};
pub use gazetteer::{search_district, ReferenceCity, DISTRICTS, MAJOR_CITIES};
pub use nearest::{nearest, Located, Nearest};

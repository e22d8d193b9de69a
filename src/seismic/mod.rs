//! Felt-earthquake scoring.
//!
//! Turns the global earthquake feed into a short list of quakes people in
//! Bangladesh could plausibly have felt:
//! - `felt_magnitude` attenuates the origin magnitude by distance and depth
//! - `rank_felt_earthquakes` filters, attributes, scores, sorts and truncates
//! - `fetch_feed` downloads the raw GeoJSON feed

mod felt;
mod fetch;
mod rank;
mod types;

// Re-export public API
pub use felt::{attenuated_magnitude, felt_magnitude};
pub use fetch::fetch_feed;
pub use rank::{in_region, rank_felt_earthquakes};
pub use types::{EventProperties, FeatureCollection, Geometry, RawSeismicEvent, ScoredEarthquake};

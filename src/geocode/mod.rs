//! Reverse geocoding: coordinates to a human-readable place name.
//!
//! A chain of remote providers is tried in order and ends in the local
//! district gazetteer, so resolution never fails.

mod corrections;
mod providers;
mod resolver;

pub use corrections::{apply_corrections, NameCorrection, KNOWN_CORRECTIONS};
pub use providers::{NominatimProvider, OpenMeteoProvider, PlaceNameProvider};
pub use resolver::{nearest_district_name, resolve_place_name, HybridGeocoder, Resolution};

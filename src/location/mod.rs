//! Location selection and persistence.
//!
//! This module provides:
//! - `LocationData` and `LocationSource`
//! - `PreferenceStore`, the saved preferred location
//! - `detect_location`, `search_location` and `startup_location`

mod select;
mod store;
mod types;

// Re-export public API
pub use crate::geo::search_district;
pub use select::{detect_location, search_location, startup_location};
pub use store::PreferenceStore;
pub use types::{LocationData, LocationSource, Selection};

//! Choosing which location to show.
//!
//! Three ways in: device coordinates (`detect_location`), a search query
//! (`search_location`), or whatever was saved last run (`startup_location`).
//! Persisting is best effort: a store that cannot be written is logged and
//! the selection still goes ahead.

use crate::geo::{search_district, GeoPoint, DISTRICTS};
use crate::geocode::HybridGeocoder;

use super::store::PreferenceStore;
use super::types::{LocationData, LocationSource, Selection};

/// Resolves device coordinates to a named location and saves it.
///
/// Without coordinates (permission denied, no fix) the fallback district is
/// used and nothing is saved.
pub async fn detect_location(
    geocoder: &HybridGeocoder,
    coords: Option<GeoPoint>,
    store: &PreferenceStore,
) -> Selection {
    let Some(point) = coords else {
        log::info!("No device coordinates, using fallback location");
        return Selection::fallback();
    };

    let name = geocoder.resolve_place_name(point, DISTRICTS).await;
    let location = LocationData {
        name,
        lat: point.latitude,
        lon: point.longitude,
        admin1: None,
        manual_search: false,
    };
    persist(store, &location);

    Selection {
        location,
        source: LocationSource::Auto,
    }
}

/// Picks the first district matching `query` and saves it as a manual choice.
///
/// Returns `None` when nothing matches; the saved preference is untouched.
pub fn search_location(query: &str, store: &PreferenceStore) -> Option<Selection> {
    let district = search_district(query)?;
    let location = LocationData::from_district(district, true);
    persist(store, &location);

    Some(Selection {
        location,
        source: LocationSource::Manual,
    })
}

/// Restores the location chosen on a previous run.
///
/// A manual choice is reused as-is. An automatic one is detected afresh from
/// `coords`. With nothing saved, or an unreadable store, the fallback
/// district is shown until the user chooses.
pub async fn startup_location(
    geocoder: &HybridGeocoder,
    store: &PreferenceStore,
    coords: Option<GeoPoint>,
) -> Selection {
    match store.load() {
        Ok(Some(saved)) if saved.manual_search => Selection {
            location: saved,
            source: LocationSource::Manual,
        },
        Ok(Some(_)) => detect_location(geocoder, coords, store).await,
        Ok(None) => Selection::fallback(),
        Err(e) => {
            log::warn!("Ignoring saved location: {}", e);
            Selection::fallback()
        }
    }
}

fn persist(store: &PreferenceStore, location: &LocationData) {
    if let Err(e) = store.save(location) {
        log::warn!("Failed to save preferred location: {}", e);
    }
}

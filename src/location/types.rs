//! Location data structures.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::{FALLBACK_LOCATION_LAT, FALLBACK_LOCATION_LON, FALLBACK_LOCATION_NAME};
use crate::geo::{GeoPoint, ReferenceCity};

/// The location the dashboard is showing, as persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub name: String,
    pub lat: f64,
    pub lon: f64,

    /// Division or state, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,

    /// True when the user picked this location by search
    #[serde(default)]
    pub manual_search: bool,
}

impl LocationData {
    /// The default district shown when nothing better is known.
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_LOCATION_NAME.to_string(),
            lat: FALLBACK_LOCATION_LAT,
            lon: FALLBACK_LOCATION_LON,
            admin1: None,
            manual_search: false,
        }
    }

    /// A location picked from the gazetteer.
    pub fn from_district(district: &ReferenceCity, manual_search: bool) -> Self {
        Self {
            name: district.name.to_string(),
            lat: district.location.latitude,
            lon: district.location.longitude,
            admin1: None,
            manual_search,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// How the current location was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LocationSource {
    /// Detected from device coordinates
    Auto,
    /// Picked by search
    Manual,
    /// Default district, nothing else available
    Fallback,
}

/// A chosen location and how it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub location: LocationData,
    pub source: LocationSource,
}

impl Selection {
    pub fn fallback() -> Self {
        Self {
            location: LocationData::fallback(),
            source: LocationSource::Fallback,
        }
    }
}

//! Seismic data structures.
//!
//! The raw types mirror the USGS GeoJSON summary feed loosely: every field
//! the pipeline needs is optional at the serde level so a malformed record
//! is reported by the ranking step rather than failing the whole decode.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Top-level GeoJSON response from the summary feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<RawSeismicEvent>,
}

/// A single event as received from the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSeismicEvent {
    /// Feed event ID
    #[serde(default)]
    pub id: String,

    pub geometry: Option<Geometry>,

    #[serde(default)]
    pub properties: EventProperties,
}

/// GeoJSON point geometry: `[longitude, latitude, depth_km]`.
///
/// Entries may be `null` in the feed; those surface as a missing hypocenter.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<Option<f64>>,
}

/// The subset of event properties the dashboard reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventProperties {
    /// Origin magnitude
    pub mag: Option<f64>,

    /// Free-text place description, e.g. "45 km SSE of Cox's Bazar, Bangladesh"
    pub place: Option<String>,

    /// "automatic" or "reviewed"
    pub status: Option<String>,

    /// Origin time (ms since epoch)
    pub time: Option<i64>,

    /// Number of "Did You Feel It?" reports
    pub felt: Option<i64>,

    /// RMS travel-time residual
    pub rms: Option<f64>,
}

impl RawSeismicEvent {
    /// Builds a well-formed event, mostly for callers assembling their own feeds.
    pub fn new(
        id: impl Into<String>,
        epicenter: GeoPoint,
        depth_km: f64,
        magnitude: f64,
        time_ms: i64,
    ) -> Self {
        Self {
            id: id.into(),
            geometry: Some(Geometry {
                coordinates: vec![
                    Some(epicenter.longitude),
                    Some(epicenter.latitude),
                    Some(depth_km),
                ],
            }),
            properties: EventProperties {
                mag: Some(magnitude),
                time: Some(time_ms),
                ..Default::default()
            },
        }
    }

    /// Epicenter and depth, if all three coordinates are present.
    pub fn hypocenter(&self) -> Option<(GeoPoint, f64)> {
        match self.geometry.as_ref()?.coordinates.as_slice() {
            [Some(lon), Some(lat), Some(depth), ..] => {
                Some((GeoPoint::new(*lat, *lon), *depth))
            }
            _ => None,
        }
    }
}

/// An event re-scored by felt magnitude at its nearest major city.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEarthquake {
    pub id: String,
    pub original_mag: f64,
    pub felt_mag: f64,
    pub place: String,
    pub nearest_city: String,
    /// Rounded kilometres to `nearest_city`
    pub distance_from_nearest_city: f64,
    /// Origin time (ms since epoch)
    pub time: i64,
    pub depth: f64,
    pub epicenter: GeoPoint,
    pub status: String,
    pub rms: f64,
    /// `["Bangladesh"]` when the feed carries felt reports, empty otherwise
    pub countries_affected: Vec<String>,
}

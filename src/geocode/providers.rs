//! Remote reverse-geocoding providers.
//!
//! Each provider answers one question: what is this point called? `Ok(None)`
//! means the provider answered but had no usable name; `Err` means it could
//! not be asked. The resolver treats both as "try the next one".

use std::sync::Arc;

use futures::future::BoxFuture;
use serde::Deserialize;

use crate::config::SECONDARY_GEOCODER_CANDIDATES;
use crate::error_handling::{FetchError, ResolutionSource};
use crate::geo::{nearest, GeoPoint, Located};
use crate::http::get_json;

use super::corrections::{apply_corrections, NameCorrection, KNOWN_CORRECTIONS};

/// A source of place names for coordinates.
pub trait PlaceNameProvider: Send + Sync {
    /// Which step of the chain this provider fills.
    fn source(&self) -> ResolutionSource;

    /// Looks up a human-readable name for `point`.
    fn lookup(&self, point: GeoPoint) -> BoxFuture<'_, Result<Option<String>, FetchError>>;
}

/// Nominatim `reverse` response; only the address block is read.
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
    state_district: Option<String>,
    state: Option<String>,
}

impl NominatimAddress {
    /// First present field, most specific first.
    pub(crate) fn place_name(self) -> Option<String> {
        [
            self.city,
            self.town,
            self.municipality,
            self.county,
            self.state_district,
            self.state,
        ]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
    }
}

/// Primary provider: OpenStreetMap Nominatim reverse geocoding.
pub struct NominatimProvider {
    client: Arc<reqwest::Client>,
    url: String,
    corrections: &'static [NameCorrection],
}

impl NominatimProvider {
    pub fn new(client: Arc<reqwest::Client>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            corrections: KNOWN_CORRECTIONS,
        }
    }

    async fn lookup_name(&self, point: GeoPoint) -> Result<Option<String>, FetchError> {
        let query = [
            ("format", "json".to_string()),
            ("lat", point.latitude.to_string()),
            ("lon", point.longitude.to_string()),
            ("zoom", "10".to_string()),
            ("addressdetails", "1".to_string()),
        ];
        let response: NominatimResponse = get_json(&self.client, &self.url, &query).await?;

        Ok(response
            .address
            .and_then(NominatimAddress::place_name)
            .map(|name| apply_corrections(name, point, self.corrections)))
    }
}

impl PlaceNameProvider for NominatimProvider {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Primary
    }

    fn lookup(&self, point: GeoPoint) -> BoxFuture<'_, Result<Option<String>, FetchError>> {
        Box::pin(self.lookup_name(point))
    }
}

/// Open-Meteo reverse response.
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    #[serde(default)]
    results: Vec<OpenMeteoCandidate>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCandidate {
    name: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl Located for OpenMeteoCandidate {
    fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Secondary provider: Open-Meteo geocoding, nearest of a few candidates.
pub struct OpenMeteoProvider {
    client: Arc<reqwest::Client>,
    url: String,
}

impl OpenMeteoProvider {
    pub fn new(client: Arc<reqwest::Client>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    async fn lookup_name(&self, point: GeoPoint) -> Result<Option<String>, FetchError> {
        let query = [
            ("latitude", point.latitude.to_string()),
            ("longitude", point.longitude.to_string()),
            ("count", SECONDARY_GEOCODER_CANDIDATES.to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];
        let response: OpenMeteoResponse = get_json(&self.client, &self.url, &query).await?;

        Ok(nearest(point, &response.results)
            .and_then(|best| best.item.name.clone())
            .filter(|name| !name.is_empty()))
    }
}

impl PlaceNameProvider for OpenMeteoProvider {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Secondary
    }

    fn lookup(&self, point: GeoPoint) -> BoxFuture<'_, Result<Option<String>, FetchError>> {
        Box::pin(self.lookup_name(point))
    }
}

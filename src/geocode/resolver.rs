//! The hybrid geocoding chain.

use std::sync::Arc;

use crate::config::{Config, FALLBACK_LOCATION_NAME};
use crate::error_handling::{GeocodeStats, ResolutionSource};
use crate::geo::{nearest, GeoPoint, ReferenceCity};

use super::providers::{NominatimProvider, OpenMeteoProvider, PlaceNameProvider};

/// A resolved name and the step of the chain that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: String,
    pub source: ResolutionSource,
}

/// Resolves coordinates to a place name through an ordered provider chain.
///
/// Providers are asked in order; a failure or an empty answer moves on to
/// the next one. When every provider has been tried the nearest district
/// of the caller's gazetteer is used, so resolution always yields a name.
pub struct HybridGeocoder {
    providers: Vec<Box<dyn PlaceNameProvider>>,
    stats: Arc<GeocodeStats>,
}

impl HybridGeocoder {
    /// Builds a geocoder over an explicit provider chain.
    pub fn new(providers: Vec<Box<dyn PlaceNameProvider>>) -> Self {
        Self {
            providers,
            stats: Arc::new(GeocodeStats::new()),
        }
    }

    /// Builds the standard chain: Nominatim, then Open-Meteo.
    pub fn from_config(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self::new(vec![
            Box::new(NominatimProvider::new(
                Arc::clone(&client),
                config.nominatim_url.clone(),
            )),
            Box::new(OpenMeteoProvider::new(
                client,
                config.open_meteo_geocoding_url.clone(),
            )),
        ])
    }

    /// Counters for resolutions and provider failures so far.
    pub fn stats(&self) -> Arc<GeocodeStats> {
        Arc::clone(&self.stats)
    }

    /// Resolves `point`, reporting which step produced the name.
    pub async fn resolve(&self, point: GeoPoint, fallback_districts: &[ReferenceCity]) -> Resolution {
        for provider in &self.providers {
            match provider.lookup(point).await {
                Ok(Some(name)) => {
                    log::debug!("{} geocoder resolved {:?} to {}", provider.source(), point, name);
                    self.stats.increment_resolution(provider.source());
                    return Resolution {
                        name,
                        source: provider.source(),
                    };
                }
                Ok(None) => {
                    log::debug!("{} geocoder had no name for {:?}", provider.source(), point);
                    self.stats.increment_empty_answer();
                }
                Err(e) => {
                    log::debug!(
                        "{} geocoder failed ({}): {}",
                        provider.source(),
                        e.kind(),
                        e
                    );
                    self.stats.increment_failure(e.kind());
                }
            }
        }

        let name = nearest_district_name(point, fallback_districts);
        log::warn!(
            "Reverse geocoding services unavailable, using nearest district {}",
            name
        );
        self.stats.increment_resolution(ResolutionSource::LocalFallback);
        Resolution {
            name,
            source: ResolutionSource::LocalFallback,
        }
    }

    /// Resolves `point` to a place name. Never fails.
    pub async fn resolve_place_name(
        &self,
        point: GeoPoint,
        fallback_districts: &[ReferenceCity],
    ) -> String {
        self.resolve(point, fallback_districts).await.name
    }
}

/// Name of the district nearest to `point`.
///
/// An empty gazetteer yields the default fallback district's name.
pub fn nearest_district_name(point: GeoPoint, districts: &[ReferenceCity]) -> String {
    nearest(point, districts)
        .map(|found| found.item.name)
        .unwrap_or(FALLBACK_LOCATION_NAME)
        .to_string()
}

/// Resolves `point` with the standard provider chain built from `config`.
pub async fn resolve_place_name(
    client: Arc<reqwest::Client>,
    config: &Config,
    point: GeoPoint,
    fallback_districts: &[ReferenceCity],
) -> String {
    HybridGeocoder::from_config(client, config)
        .resolve_place_name(point, fallback_districts)
        .await
}

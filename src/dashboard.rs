//! Dashboard state: the location, forecast and earthquake list on screen.
//!
//! Each panel lives in its own slot and is refreshed independently. A slot
//! takes the result of whichever refresh finishes last, even if it was
//! started first; a failed refresh leaves the slot as it was.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error_handling::{FetchError, InitializationError, RefreshError};
use crate::geo::{GeoPoint, MAJOR_CITIES};
use crate::geocode::HybridGeocoder;
use crate::initialization::init_client;
use crate::location::{
    detect_location, search_location, startup_location, PreferenceStore, Selection,
};
use crate::seismic::{fetch_feed, rank_felt_earthquakes, ScoredEarthquake};
use crate::time::bangladesh_now;
use crate::weather::{cyclone_season_alert, fetch_forecast, WeatherAlert, WeatherData};

/// One independently refreshed panel.
#[derive(Debug)]
pub struct Slot<T> {
    value: RwLock<Option<T>>,
}

impl<T: Clone> Slot<T> {
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    /// Awaits `update` and stores its value on success.
    pub async fn fill<E, F>(&self, update: F) -> Result<(), E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let value = update.await?;
        *self.value.write().await = Some(value);
        Ok(())
    }

    pub async fn set(&self, value: T) {
        *self.value.write().await = Some(value);
    }

    pub async fn get(&self) -> Option<T> {
        self.value.read().await.clone()
    }
}

impl<T: Clone> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of every panel.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub location: Option<Selection>,
    pub weather: Option<WeatherData>,
    pub earthquakes: Option<Vec<ScoredEarthquake>>,
    /// Provider alerts plus the seasonal cyclone advisory
    pub alerts: Vec<WeatherAlert>,
}

/// The dashboard and the services behind it.
pub struct Dashboard {
    client: Arc<reqwest::Client>,
    config: Config,
    geocoder: HybridGeocoder,
    store: PreferenceStore,
    location: Slot<Selection>,
    weather: Slot<WeatherData>,
    earthquakes: Slot<Vec<ScoredEarthquake>>,
}

impl Dashboard {
    pub fn new(client: Arc<reqwest::Client>, config: Config) -> Self {
        let geocoder = HybridGeocoder::from_config(Arc::clone(&client), &config);
        let store = PreferenceStore::new(config.preference_path.clone());
        Self {
            client,
            config,
            geocoder,
            store,
            location: Slot::new(),
            weather: Slot::new(),
            earthquakes: Slot::new(),
        }
    }

    /// Builds the HTTP client from `config` and the dashboard around it.
    pub fn from_config(config: Config) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self::new(client, config))
    }

    pub fn geocoder(&self) -> &HybridGeocoder {
        &self.geocoder
    }

    /// Downloads the feed and replaces the earthquake panel.
    ///
    /// Returns how many quakes are shown.
    pub async fn refresh_earthquakes(&self) -> Result<usize, RefreshError> {
        let events = fetch_feed(&self.client, &self.config.earthquake_feed_url).await?;
        let ranked = rank_felt_earthquakes(&events, MAJOR_CITIES)?;
        let shown = ranked.len();
        self.earthquakes.set(ranked).await;
        log::info!("Showing {} felt earthquakes", shown);
        Ok(shown)
    }

    /// Downloads the forecast for `point` and replaces the weather panel.
    pub async fn refresh_weather(&self, point: GeoPoint) -> Result<(), FetchError> {
        self.weather
            .fill(fetch_forecast(
                &self.client,
                &self.config.forecast_url,
                point,
            ))
            .await
    }

    /// Re-detects the location from device coordinates.
    pub async fn refresh_location(&self, coords: Option<GeoPoint>) -> Selection {
        let selection = detect_location(&self.geocoder, coords, &self.store).await;
        self.location.set(selection.clone()).await;
        selection
    }

    /// Switches to the first district matching `query`.
    ///
    /// Returns `None` and changes nothing when no district matches.
    pub async fn search(&self, query: &str) -> Option<Selection> {
        let selection = search_location(query, &self.store)?;
        self.location.set(selection.clone()).await;
        Some(selection)
    }

    /// Restores the location saved on a previous run.
    pub async fn restore_location(&self, coords: Option<GeoPoint>) -> Selection {
        let selection = startup_location(&self.geocoder, &self.store, coords).await;
        self.location.set(selection.clone()).await;
        log::info!(
            "Location: {} ({})",
            selection.location.name,
            selection.source
        );
        selection
    }

    /// First load: restore the location, then fetch weather and earthquakes
    /// concurrently.
    ///
    /// Panel failures are logged and leave the panel empty; the location is
    /// always set.
    pub async fn start(&self, coords: Option<GeoPoint>) -> Selection {
        let selection = self.restore_location(coords).await;

        let (weather, quakes) = tokio::join!(
            self.refresh_weather(selection.location.point()),
            self.refresh_earthquakes()
        );
        if let Err(e) = weather {
            log::error!("Weather refresh failed: {}", e);
        }
        if let Err(e) = quakes {
            log::error!("Earthquake refresh failed: {}", e);
        }
        selection
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let weather = self.weather.get().await;
        let mut alerts: Vec<WeatherAlert> = weather
            .as_ref()
            .map(|w| w.alerts.clone())
            .unwrap_or_default();
        alerts.extend(cyclone_season_alert(bangladesh_now()));

        DashboardSnapshot {
            location: self.location.get().await,
            weather,
            earthquakes: self.earthquakes.get().await,
            alerts,
        }
    }
}

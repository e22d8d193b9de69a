//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! seismic region of interest, the felt-magnitude calibration, display limits,
//! default service endpoints and network timeouts.

use std::time::Duration;

// Seismic region of interest (Bangladesh and the surrounding plate boundaries)
/// Southern edge of the earthquake bounding box (degrees latitude, inclusive)
pub const REGION_MIN_LAT: f64 = 15.0;
/// Northern edge of the earthquake bounding box (degrees latitude, inclusive)
pub const REGION_MAX_LAT: f64 = 32.0;
/// Western edge of the earthquake bounding box (degrees longitude, inclusive)
pub const REGION_MIN_LON: f64 = 80.0;
/// Eastern edge of the earthquake bounding box (degrees longitude, inclusive)
pub const REGION_MAX_LON: f64 = 100.0;

// Felt-magnitude model
/// Kilometres of epicentral distance that cost one point of felt magnitude
pub const DISTANCE_ATTENUATION_KM: f64 = 150.0;
/// Kilometres of hypocentral depth that cost one point of felt magnitude
pub const DEPTH_ATTENUATION_KM: f64 = 80.0;
/// Lowest felt magnitude ever reported
pub const MIN_FELT_MAGNITUDE: f64 = 0.1;
/// Events attenuating below this felt magnitude are not shown
pub const PERCEPTIBILITY_THRESHOLD: f64 = 1.0;
/// Maximum number of ranked earthquakes returned
pub const MAX_DISPLAYED_EARTHQUAKES: usize = 15;

/// Mean Earth radius used by the haversine distance (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// City reported when the reference table is empty
pub const PRIMARY_CITY_NAME: &str = "Dhaka";

// Service endpoints
/// USGS all-month GeoJSON summary feed
pub const DEFAULT_EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";
/// Nominatim reverse geocoding endpoint (primary provider)
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";
/// Open-Meteo reverse geocoding endpoint (secondary provider)
pub const DEFAULT_OPEN_METEO_GEOCODING_URL: &str =
    "https://geocoding-api.open-meteo.com/v1/reverse";
/// Open-Meteo forecast endpoint
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Number of nearby candidates requested from the secondary geocoder
pub const SECONDARY_GEOCODER_CANDIDATES: usize = 5;

/// User-Agent sent to every service.
///
/// Nominatim's usage policy rejects requests without an identifying agent.
pub const DEFAULT_USER_AGENT: &str = "AmarWeatherBD/1.0";

// Network operation timeouts
/// Per-request HTTP timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// Connection establishment timeout
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

// Forecast shaping
/// Days of forecast requested from Open-Meteo
pub const FORECAST_DAYS: u32 = 10;
/// Hourly entries kept after dropping the hours already past
pub const MAX_HOURLY_ENTRIES: usize = 24;
/// Bangladesh Standard Time offset from UTC in seconds (UTC+06:00, no DST)
pub const BANGLADESH_UTC_OFFSET_SECS: i32 = 6 * 60 * 60;
/// IANA name sent to Open-Meteo so local times come back in Dhaka time
pub const BANGLADESH_TIMEZONE: &str = "Asia/Dhaka";

/// Default file holding the preferred location
pub const DEFAULT_PREFERENCE_FILE: &str = ".amar_weather/preferred_location.json";

// Location used when nothing better is known
/// District shown when the user declines location access
pub const FALLBACK_LOCATION_NAME: &str = "Gazipur";
/// Latitude of the fallback district
pub const FALLBACK_LOCATION_LAT: f64 = 23.9989;
/// Longitude of the fallback district
pub const FALLBACK_LOCATION_LON: f64 = 90.4264;

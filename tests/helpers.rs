// Shared test helpers: a dashboard config pointed at one mock server, and
// canned service payloads.

#![allow(dead_code)] // Not every test file uses every helper

use std::path::Path;

use amar_weather::Config;
use httptest::Server;

pub const FEED_PATH: &str = "/earthquakes/feed/v1.0/summary/all_month.geojson";
pub const NOMINATIM_PATH: &str = "/reverse";
pub const GEOCODING_PATH: &str = "/v1/reverse";
pub const FORECAST_PATH: &str = "/v1/forecast";

/// Config with every service on `server` and the preference file in `dir`.
pub fn config_for(server: &Server, dir: &Path) -> Config {
    Config {
        earthquake_feed_url: server.url(FEED_PATH).to_string(),
        nominatim_url: server.url(NOMINATIM_PATH).to_string(),
        open_meteo_geocoding_url: server.url(GEOCODING_PATH).to_string(),
        forecast_url: server.url(FORECAST_PATH).to_string(),
        timeout_seconds: 5,
        preference_path: dir.join("preferred_location.json"),
        ..Default::default()
    }
}

/// One felt quake under Dhaka, one out of the region, one too weak to feel.
pub const FEED_BODY: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"id": "dhaka", "geometry": {"type": "Point", "coordinates": [90.4125, 23.8103, 10.0]},
         "properties": {"mag": 5.0, "time": 1700000000000, "place": "Dhaka, Bangladesh",
                        "status": "reviewed", "felt": 120, "rms": 0.61}},
        {"id": "japan", "geometry": {"type": "Point", "coordinates": [140.0, 36.0, 40.0]},
         "properties": {"mag": 6.8, "time": 1700000500000, "place": "Honshu, Japan"}},
        {"id": "tibet", "geometry": {"type": "Point", "coordinates": [99.0, 31.0, 10.0]},
         "properties": {"mag": 4.0, "time": 1700000900000, "place": "Western Xizang"}}
    ]
}"#;

/// A feed record with no geometry.
pub const MALFORMED_FEED_BODY: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"id": "broken", "geometry": null, "properties": {"mag": 5.0, "time": 1}}
    ]
}"#;

/// Forecast whose hourly rows are all in the future.
pub const FORECAST_BODY: &str = r#"{
    "current": {
        "temperature_2m": 31.0, "apparent_temperature": 35.5,
        "relative_humidity_2m": 70.0, "precipitation": 0.0, "weather_code": 3,
        "wind_speed_10m": 9.0, "wind_direction_10m": 200.0, "cloud_cover": 75.0,
        "pressure_msl": 1006.0, "visibility": 16000.0, "is_day": 1
    },
    "hourly": {
        "time": ["2099-01-01T00:00", "2099-01-01T01:00", "2099-01-01T02:00"],
        "temperature_2m": [24.0, 23.5, 23.0],
        "precipitation_probability": [0, 5, 10],
        "weather_code": [1, 2, 3],
        "uv_index": [0.0, 0.0, 0.0]
    },
    "daily": {
        "time": ["2099-01-01"],
        "weather_code": [3],
        "temperature_2m_max": [28.0],
        "temperature_2m_min": [18.0],
        "sunrise": ["2099-01-01T06:40"],
        "sunset": ["2099-01-01T17:25"],
        "precipitation_sum": [0.0],
        "precipitation_probability_max": [10],
        "uv_index_max": [5.2]
    }
}"#;

//! Forecast data structures.
//!
//! `ForecastResponse` and its parts mirror the Open-Meteo payload (parallel
//! arrays keyed by index). `WeatherData` is the reshaped, row-oriented view
//! the dashboard renders.

use serde::{Deserialize, Serialize};

/// Open-Meteo forecast response.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: RawCurrent,

    #[serde(default)]
    pub hourly: RawHourly,

    #[serde(default)]
    pub daily: RawDaily,

    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: f64,
    #[serde(default)]
    pub precipitation: Option<f64>,
    pub weather_code: u16,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub cloud_cover: f64,
    pub pressure_msl: f64,
    /// Metres
    pub visibility: Option<f64>,
    pub is_day: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHourly {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub weather_code: Vec<Option<u16>>,
    pub uv_index: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDaily {
    pub time: Vec<String>,
    pub weather_code: Vec<Option<u16>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub sunrise: Vec<Option<String>>,
    pub sunset: Vec<Option<String>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub uv_index_max: Vec<Option<f64>>,
}

/// A weather warning, either from the provider or raised locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherAlert {
    pub source: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub description: String,
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Conditions right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// °C
    pub temp: f64,
    /// °C
    pub feels_like: f64,
    /// %
    pub humidity: f64,
    /// km/h
    pub wind_speed: f64,
    /// Degrees
    pub wind_direction: f64,
    pub weather_code: u16,
    /// 1 by day, 0 by night
    pub is_day: u8,
    /// %
    pub cloud_cover: f64,
    /// hPa at sea level
    pub pressure: f64,
    /// km
    pub visibility: f64,
    pub uv_index: f64,
}

/// One forecast hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecast {
    /// Dhaka local time, `YYYY-MM-DDTHH:MM`
    pub time: String,
    pub temp: Option<f64>,
    pub weather_code: Option<u16>,
    pub precip_prob: Option<f64>,
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: String,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub weather_code: Option<u16>,
    pub rain_prob: Option<f64>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub uv_index_max: Option<f64>,
}

/// Reshaped forecast for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherData {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
    pub alerts: Vec<WeatherAlert>,
}

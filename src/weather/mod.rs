//! Weather forecast retrieval and classification.
//!
//! This module provides:
//! - `fetch_forecast`: downloads the Open-Meteo forecast for a point
//! - `reshape_forecast`: pure payload-to-rows conversion given "now"
//! - `WeatherType` and `cyclone_season_alert` for display

mod classify;
mod fetch;
mod reshape;
mod types;

// Re-export public API
pub use classify::{cyclone_season_alert, WeatherType};
pub use fetch::fetch_forecast;
pub use reshape::reshape_forecast;
pub use types::{
    CurrentConditions, DailyForecast, ForecastResponse, HourlyForecast, RawCurrent, RawDaily,
    RawHourly, WeatherAlert, WeatherData,
};

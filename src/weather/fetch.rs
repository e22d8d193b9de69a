//! Forecast download.

use crate::config::{BANGLADESH_TIMEZONE, FORECAST_DAYS};
use crate::error_handling::FetchError;
use crate::geo::GeoPoint;
use crate::http::get_json;
use crate::time::bangladesh_now;

use super::reshape::reshape_forecast;
use super::types::{ForecastResponse, WeatherData};

const CURRENT_VARIABLES: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
precipitation,weather_code,wind_speed_10m,wind_direction_10m,cloud_cover,pressure_msl,\
visibility,is_day";
const HOURLY_VARIABLES: &str = "temperature_2m,precipitation_probability,weather_code,uv_index";
const DAILY_VARIABLES: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,\
sunset,precipitation_sum,precipitation_probability_max,uv_index_max";

/// Downloads and reshapes the forecast for `point` from the forecast API at `url`.
pub async fn fetch_forecast(
    client: &reqwest::Client,
    url: &str,
    point: GeoPoint,
) -> Result<WeatherData, FetchError> {
    let query = [
        ("latitude", point.latitude.to_string()),
        ("longitude", point.longitude.to_string()),
        ("current", CURRENT_VARIABLES.to_string()),
        ("hourly", HOURLY_VARIABLES.to_string()),
        ("daily", DAILY_VARIABLES.to_string()),
        ("timezone", BANGLADESH_TIMEZONE.to_string()),
        ("forecast_days", FORECAST_DAYS.to_string()),
        ("temperature_unit", "celsius".to_string()),
        ("wind_speed_unit", "kmh".to_string()),
        ("precipitation_unit", "mm".to_string()),
        ("alerts", "true".to_string()),
    ];
    let raw: ForecastResponse = get_json(client, url, &query).await?;
    log::debug!(
        "Fetched forecast for ({}, {}): {} hourly, {} daily rows",
        point.latitude,
        point.longitude,
        raw.hourly.time.len(),
        raw.daily.time.len()
    );
    Ok(reshape_forecast(raw, bangladesh_now()))
}

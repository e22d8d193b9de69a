//! Turns the column-oriented forecast payload into rows.

use chrono::{DateTime, FixedOffset};

use crate::config::MAX_HOURLY_ENTRIES;
use crate::time::{parse_local_time, truncate_to_hour};

use super::types::{
    CurrentConditions, DailyForecast, ForecastResponse, HourlyForecast, RawDaily, RawHourly,
    WeatherData,
};

/// Reshapes a forecast payload as seen at `now`.
///
/// Hourly rows start at the current Dhaka hour (the hour in progress is
/// kept) and are capped at `MAX_HOURLY_ENTRIES`. Rows with an unparseable
/// time are dropped. Missing provider alerts become an empty list.
pub fn reshape_forecast(raw: ForecastResponse, now: DateTime<FixedOffset>) -> WeatherData {
    let current = CurrentConditions {
        temp: raw.current.temperature_2m,
        feels_like: raw.current.apparent_temperature,
        humidity: raw.current.relative_humidity_2m,
        wind_speed: raw.current.wind_speed_10m,
        wind_direction: raw.current.wind_direction_10m,
        weather_code: raw.current.weather_code,
        is_day: raw.current.is_day,
        cloud_cover: raw.current.cloud_cover,
        pressure: raw.current.pressure_msl,
        visibility: raw.current.visibility.unwrap_or(0.0) / 1000.0,
        uv_index: raw.hourly.uv_index.first().copied().flatten().unwrap_or(0.0),
    };

    WeatherData {
        current,
        hourly: hourly_from(&raw.hourly, now),
        daily: daily_from(&raw.daily),
        alerts: raw.alerts,
    }
}

fn hourly_from(hourly: &RawHourly, now: DateTime<FixedOffset>) -> Vec<HourlyForecast> {
    let start = truncate_to_hour(now);

    hourly
        .time
        .iter()
        .enumerate()
        .filter(|(_, time)| parse_local_time(time).is_some_and(|t| t >= start))
        .take(MAX_HOURLY_ENTRIES)
        .map(|(i, time)| HourlyForecast {
            time: time.clone(),
            temp: at(&hourly.temperature_2m, i),
            weather_code: at(&hourly.weather_code, i),
            precip_prob: at(&hourly.precipitation_probability, i),
        })
        .collect()
}

fn daily_from(daily: &RawDaily) -> Vec<DailyForecast> {
    daily
        .time
        .iter()
        .enumerate()
        .map(|(i, date)| DailyForecast {
            date: date.clone(),
            max_temp: at(&daily.temperature_2m_max, i),
            min_temp: at(&daily.temperature_2m_min, i),
            weather_code: at(&daily.weather_code, i),
            rain_prob: at(&daily.precipitation_probability_max, i),
            sunrise: daily.sunrise.get(i).cloned().flatten(),
            sunset: daily.sunset.get(i).cloned().flatten(),
            uv_index_max: at(&daily.uv_index_max, i),
        })
        .collect()
}

fn at<T: Copy>(column: &[Option<T>], i: usize) -> Option<T> {
    column.get(i).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherAlert;

    fn payload(hours: &[&str]) -> ForecastResponse {
        let temps: Vec<f64> = (0..hours.len()).map(|i| 25.0 + i as f64).collect();
        let body = serde_json::json!({
            "current": {
                "temperature_2m": 31.2, "apparent_temperature": 36.0,
                "relative_humidity_2m": 74.0, "precipitation": 0.0,
                "weather_code": 2, "wind_speed_10m": 11.5, "wind_direction_10m": 190.0,
                "cloud_cover": 40.0, "pressure_msl": 1004.1, "visibility": 24140.0,
                "is_day": 1
            },
            "hourly": {
                "time": hours,
                "temperature_2m": temps,
                "precipitation_probability": vec![10.0; hours.len()],
                "weather_code": vec![61; hours.len()],
                "uv_index": vec![6.5; hours.len()]
            },
            "daily": {
                "time": ["2024-05-01", "2024-05-02"],
                "weather_code": [61, 95],
                "temperature_2m_max": [34.0, 33.0],
                "temperature_2m_min": [26.0, null],
                "sunrise": ["2024-05-01T05:20", "2024-05-02T05:19"],
                "sunset": ["2024-05-01T18:25", "2024-05-02T18:26"],
                "precipitation_sum": [2.0, 9.5],
                "precipitation_probability_max": [40.0, 80.0],
                "uv_index_max": [9.1, 8.7]
            }
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_current_conditions_units() {
        let now = parse_local_time("2024-05-01T14:20").unwrap();
        let data = reshape_forecast(payload(&["2024-05-01T14:00"]), now);
        assert!((data.current.visibility - 24.14).abs() < 1e-9);
        assert_eq!(data.current.uv_index, 6.5);
        assert_eq!(data.current.weather_code, 2);
        assert!(data.alerts.is_empty());
    }

    #[test]
    fn test_hourly_starts_at_current_hour() {
        let now = parse_local_time("2024-05-01T14:20").unwrap();
        let data = reshape_forecast(
            payload(&[
                "2024-05-01T12:00",
                "2024-05-01T13:00",
                "2024-05-01T14:00",
                "2024-05-01T15:00",
            ]),
            now,
        );
        let times: Vec<&str> = data.hourly.iter().map(|h| h.time.as_str()).collect();
        assert_eq!(times, ["2024-05-01T14:00", "2024-05-01T15:00"]);
        assert_eq!(data.hourly[0].temp, Some(27.0));
    }

    #[test]
    fn test_hourly_capped_at_24() {
        let hours: Vec<String> = (0..72)
            .map(|i| format!("2024-05-{:02}T{:02}:00", 1 + i / 24, i % 24))
            .collect();
        let refs: Vec<&str> = hours.iter().map(String::as_str).collect();
        let now = parse_local_time("2024-05-01T00:00").unwrap();

        let data = reshape_forecast(payload(&refs), now);
        assert_eq!(data.hourly.len(), MAX_HOURLY_ENTRIES);
        assert_eq!(data.hourly[0].time, "2024-05-01T00:00");
    }

    #[test]
    fn test_daily_rows_and_nulls() {
        let now = parse_local_time("2024-05-01T14:20").unwrap();
        let data = reshape_forecast(payload(&[]), now);
        assert_eq!(data.daily.len(), 2);
        assert_eq!(data.daily[1].weather_code, Some(95));
        assert_eq!(data.daily[1].min_temp, None);
        assert_eq!(data.daily[0].sunrise.as_deref(), Some("2024-05-01T05:20"));
        // No hourly rows means no UV reading.
        assert_eq!(data.current.uv_index, 0.0);
    }

    #[test]
    fn test_alerts_pass_through() {
        let mut raw = payload(&[]);
        raw.alerts.push(WeatherAlert {
            source: "BMD".into(),
            alert_type: "Signal 3".into(),
            description: "Local cautionary signal".into(),
            severity: "Moderate".into(),
            ..Default::default()
        });
        let now = parse_local_time("2024-05-01T14:20").unwrap();
        let data = reshape_forecast(raw, now);
        assert_eq!(data.alerts.len(), 1);
        assert_eq!(data.alerts[0].alert_type, "Signal 3");
    }
}

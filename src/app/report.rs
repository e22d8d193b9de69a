//! Terminal rendering of dashboard panels.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset};
use colored::*;
use serde::Serialize;

use crate::config::ReportFormat;
use crate::dashboard::DashboardSnapshot;
use crate::location::Selection;
use crate::seismic::ScoredEarthquake;
use crate::time::{parse_local_time, relative_time, time_ago};
use crate::weather::{WeatherAlert, WeatherData, WeatherType};

/// Hourly rows shown in the plain report.
const HOURLY_ROWS: usize = 6;

/// Renders `value` as pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Renders the ranked earthquake list, newest first.
pub fn render_earthquakes(quakes: &[ScoredEarthquake], now_ms: i64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Felt earthquakes (last 30 days)".bold());
    if quakes.is_empty() {
        let _ = writeln!(out, "  No perceptible earthquakes near Bangladesh.");
        return out;
    }

    for quake in quakes {
        let felt = format!("felt {:.1}", quake.felt_mag);
        let felt = if quake.felt_mag >= 5.0 {
            felt.red().bold()
        } else if quake.felt_mag >= 4.0 {
            felt.yellow()
        } else {
            felt.green()
        };
        let _ = writeln!(
            out,
            "  {} (M{:.1}, {:.0} km deep) {}",
            felt, quake.original_mag, quake.depth, quake.place
        );
        let _ = writeln!(
            out,
            "      {} km from {} · {} · {}",
            quake.distance_from_nearest_city,
            quake.nearest_city,
            time_ago(quake.time, now_ms).dimmed(),
            quake.status
        );
    }
    out
}

/// Renders the current location and its forecast.
pub fn render_weather(
    selection: &Selection,
    weather: &WeatherData,
    now: DateTime<FixedOffset>,
) -> String {
    let mut out = String::new();
    let current = &weather.current;
    let kind = WeatherType::from_code(current.weather_code);

    let _ = writeln!(
        out,
        "{} {} {}",
        kind.emoji(),
        selection.location.name.bold(),
        format!("[{}]", selection.source).dimmed()
    );
    let _ = writeln!(
        out,
        "  {:.1}°C (feels {:.1}°C), {}",
        current.temp, current.feels_like, kind
    );
    let _ = writeln!(
        out,
        "  Humidity {:.0}%  Wind {:.1} km/h @ {:.0}°  Pressure {:.0} hPa",
        current.humidity, current.wind_speed, current.wind_direction, current.pressure
    );
    let _ = writeln!(
        out,
        "  Clouds {:.0}%  Visibility {:.1} km  UV {:.1}",
        current.cloud_cover, current.visibility, current.uv_index
    );

    if !weather.hourly.is_empty() {
        let _ = writeln!(out, "{}", "Next hours".bold());
        for hour in weather.hourly.iter().take(HOURLY_ROWS) {
            let label = parse_local_time(&hour.time)
                .map(|t| relative_time(t, now))
                .unwrap_or_default();
            let emoji = hour
                .weather_code
                .map(|code| WeatherType::from_code(code).emoji())
                .unwrap_or(" ");
            let _ = writeln!(
                out,
                "  {:<10} {} {}  rain {}",
                label,
                emoji,
                optional(hour.temp, "°C"),
                optional(hour.precip_prob, "%")
            );
        }
    }

    if !weather.daily.is_empty() {
        let _ = writeln!(out, "{}", "Forecast".bold());
        for day in &weather.daily {
            let emoji = day
                .weather_code
                .map(|code| WeatherType::from_code(code).emoji())
                .unwrap_or(" ");
            let _ = writeln!(
                out,
                "  {} {} {} / {}  rain {}",
                day.date,
                emoji,
                optional(day.max_temp, "°C"),
                optional(day.min_temp, "°C"),
                optional(day.rain_prob, "%")
            );
        }
    }
    out
}

/// Renders active alerts, or nothing when there are none.
pub fn render_alerts(alerts: &[WeatherAlert]) -> String {
    let mut out = String::new();
    for alert in alerts {
        let _ = writeln!(
            out,
            "{} {} ({}, {}): {}",
            "⚠".yellow().bold(),
            alert.alert_type.yellow().bold(),
            alert.source,
            alert.severity,
            alert.description
        );
    }
    out
}

/// Renders a full dashboard snapshot.
pub fn render_snapshot(
    snapshot: &DashboardSnapshot,
    format: ReportFormat,
    now: DateTime<FixedOffset>,
) -> Result<String, serde_json::Error> {
    if format == ReportFormat::Json {
        return render_json(snapshot);
    }

    let mut out = render_alerts(&snapshot.alerts);
    match (&snapshot.location, &snapshot.weather) {
        (Some(selection), Some(weather)) => out.push_str(&render_weather(selection, weather, now)),
        (Some(selection), None) => {
            let _ = writeln!(
                out,
                "{} {}",
                selection.location.name.bold(),
                "(weather unavailable)".red()
            );
        }
        (None, _) => {}
    }
    out.push('\n');
    match &snapshot.earthquakes {
        Some(quakes) => out.push_str(&render_earthquakes(quakes, now.timestamp_millis())),
        None => {
            let _ = writeln!(out, "{}", "Earthquake data unavailable".red());
        }
    }
    Ok(out)
}

fn optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.0}{}", v, unit),
        None => "--".to_string(),
    }
}

//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_EARTHQUAKE_FEED_URL, DEFAULT_FORECAST_URL, DEFAULT_NOMINATIM_URL,
    DEFAULT_OPEN_METEO_GEOCODING_URL, DEFAULT_PREFERENCE_FILE, DEFAULT_USER_AGENT,
    HTTP_TIMEOUT_SECS,
};
use crate::config::types::{Config, LogFormat, LogLevel, ReportFormat};
use crate::geo::GeoPoint;

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Felt earthquakes near Bangladesh
/// amar_weather quakes
///
/// # Name a coordinate
/// amar_weather locate 24.75 90.42
///
/// # Full dashboard for the device position, as JSON
/// amar_weather --format json dashboard --lat 23.81 --lon 90.41
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "amar_weather",
    about = "Weather and felt-earthquake dashboard for Bangladesh."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Earthquake GeoJSON feed URL
    #[arg(long, global = true, default_value = DEFAULT_EARTHQUAKE_FEED_URL)]
    pub feed_url: String,

    /// Primary reverse geocoder URL
    #[arg(long, global = true, default_value = DEFAULT_NOMINATIM_URL)]
    pub nominatim_url: String,

    /// Secondary reverse geocoder URL
    #[arg(long, global = true, default_value = DEFAULT_OPEN_METEO_GEOCODING_URL)]
    pub geocoding_url: String,

    /// Forecast API URL
    #[arg(long, global = true, default_value = DEFAULT_FORECAST_URL)]
    pub forecast_url: String,

    /// Where the preferred location is saved
    #[arg(long, global = true, value_parser, default_value = DEFAULT_PREFERENCE_FILE)]
    pub preference_file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank recent earthquakes by how strongly they were felt in Bangladesh
    Quakes,

    /// Resolve coordinates to a place name
    #[command(allow_negative_numbers = true)]
    Locate {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    },

    /// Pick a district by name and save it as the preferred location
    Search {
        /// Part of a district name, any case
        query: String,
    },

    /// Forecast for the given coordinates, or the saved location
    #[command(allow_negative_numbers = true)]
    Weather(PositionArgs),

    /// Location, forecast, alerts and earthquakes together
    #[command(allow_negative_numbers = true)]
    Dashboard(PositionArgs),

    /// Forget the saved location
    Forget,
}

/// Device position, when one is available.
#[derive(Debug, Args)]
pub struct PositionArgs {
    /// Latitude in degrees
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,
}

impl PositionArgs {
    pub fn point(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.lat?, self.lon?))
    }
}

impl Cli {
    /// Library configuration for these options.
    pub fn config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            earthquake_feed_url: self.feed_url.clone(),
            nominatim_url: self.nominatim_url.clone(),
            open_meteo_geocoding_url: self.geocoding_url.clone(),
            forecast_url: self.forecast_url.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            preference_path: self.preference_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library_config() {
        let cli = Cli::try_parse_from(["amar_weather", "quakes"]).unwrap();
        let config = cli.config();
        let defaults = Config::default();
        assert_eq!(config.earthquake_feed_url, defaults.earthquake_feed_url);
        assert_eq!(config.nominatim_url, defaults.nominatim_url);
        assert_eq!(config.preference_path, defaults.preference_path);
        assert_eq!(config.timeout_seconds, defaults.timeout_seconds);
        assert_eq!(cli.format, ReportFormat::Plain);
    }

    #[test]
    fn test_locate_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["amar_weather", "locate", "-33.9", "151.2"]).unwrap();
        match cli.command {
            Command::Locate {
                latitude,
                longitude,
            } => {
                assert_eq!(latitude, -33.9);
                assert_eq!(longitude, 151.2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_position_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["amar_weather", "weather", "--lat", "23.8"]).is_err());

        let cli = Cli::try_parse_from([
            "amar_weather",
            "--format",
            "json",
            "dashboard",
            "--lat",
            "23.8",
            "--lon",
            "90.4",
        ])
        .unwrap();
        assert_eq!(cli.format, ReportFormat::Json);
        match cli.command {
            Command::Dashboard(position) => {
                assert_eq!(position.point(), Some(GeoPoint::new(23.8, 90.4)));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "amar_weather",
            "search",
            "sylhet",
            "--feed-url",
            "http://localhost:1/feed",
        ])
        .unwrap();
        assert_eq!(cli.config().earthquake_feed_url, "http://localhost:1/feed");
    }
}

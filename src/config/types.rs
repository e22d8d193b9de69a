//! Configuration types.
//!
//! This module defines the logging enums (usable as CLI value enums) and the
//! library configuration struct.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_EARTHQUAKE_FEED_URL, DEFAULT_FORECAST_URL, DEFAULT_NOMINATIM_URL,
    DEFAULT_OPEN_METEO_GEOCODING_URL, DEFAULT_PREFERENCE_FILE, DEFAULT_USER_AGENT,
    HTTP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored text for a terminal
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Every remote endpoint is configurable so tests and mirrors can point the
/// pipelines at other servers.
///
/// # Examples
///
/// ```no_run
/// use amar_weather::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Earthquake GeoJSON feed URL
    pub earthquake_feed_url: String,

    /// Primary reverse geocoder endpoint
    pub nominatim_url: String,

    /// Secondary reverse geocoder endpoint
    pub open_meteo_geocoding_url: String,

    /// Forecast endpoint
    pub forecast_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// File the preferred location is persisted to
    pub preference_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            earthquake_feed_url: DEFAULT_EARTHQUAKE_FEED_URL.to_string(),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            open_meteo_geocoding_url: DEFAULT_OPEN_METEO_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            preference_path: PathBuf::from(DEFAULT_PREFERENCE_FILE),
        }
    }
}

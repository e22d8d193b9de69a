//! amar_weather library: weather and felt-earthquake awareness for Bangladesh
//!
//! This library provides:
//! - Felt-earthquake ranking: which recent quakes were noticeable in
//!   Bangladesh, attributed to the nearest major city
//! - Hybrid reverse geocoding that always yields a place name
//! - Open-Meteo forecasts reshaped for display, with cyclone-season alerts
//! - Location selection with a saved preference
//!
//! # Example
//!
//! ```no_run
//! use amar_weather::geo::MAJOR_CITIES;
//! use amar_weather::initialization::init_client;
//! use amar_weather::seismic::{fetch_feed, rank_felt_earthquakes};
//! use amar_weather::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//!
//! let events = fetch_feed(&client, &config.earthquake_feed_url).await?;
//! for quake in rank_felt_earthquakes(&events, MAJOR_CITIES)? {
//!     println!("{} felt {} near {}", quake.place, quake.felt_mag, quake.nearest_city);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The network-facing functions require a Tokio runtime. The ranking,
//! distance and reshaping functions are pure and synchronous.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod error_handling;
pub mod geo;
pub mod geocode;
mod http;
pub mod initialization;
pub mod location;
pub mod seismic;
pub mod time;
pub mod weather;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ReportFormat};
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use error_handling::{FetchError, RankError, RefreshError};

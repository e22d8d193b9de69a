//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `amar_weather` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use amar_weather::app::{
    print_geocode_statistics, render_alerts, render_earthquakes, render_json, render_snapshot,
    render_weather,
};
use amar_weather::config::{Cli, Command};
use amar_weather::geo::{GeoPoint, DISTRICTS};
use amar_weather::initialization::init_logger_with;
use amar_weather::location::{PreferenceStore, Selection};
use amar_weather::time::bangladesh_now;
use amar_weather::{Dashboard, ReportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("amar_weather error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    let config = cli.config();
    let dashboard = Dashboard::from_config(config.clone()).context("Failed to initialize")?;
    let store = PreferenceStore::new(config.preference_path.clone());
    let now = bangladesh_now();

    match cli.command {
        Command::Quakes => {
            dashboard
                .refresh_earthquakes()
                .await
                .context("Failed to load earthquakes")?;
            let quakes = dashboard.snapshot().await.earthquakes.unwrap_or_default();
            match format {
                ReportFormat::Json => println!("{}", render_json(&quakes)?),
                ReportFormat::Plain => {
                    print!("{}", render_earthquakes(&quakes, now.timestamp_millis()))
                }
            }
        }
        Command::Locate {
            latitude,
            longitude,
        } => {
            let resolution = dashboard
                .geocoder()
                .resolve(GeoPoint::new(latitude, longitude), DISTRICTS)
                .await;
            match format {
                ReportFormat::Json => println!(
                    "{}",
                    render_json(&serde_json::json!({
                        "name": resolution.name,
                        "source": resolution.source.to_string(),
                    }))?
                ),
                ReportFormat::Plain => println!("{} (via {})", resolution.name, resolution.source),
            }
            print_geocode_statistics(&dashboard.geocoder().stats());
        }
        Command::Search { query } => {
            let selection = dashboard
                .search(&query)
                .await
                .with_context(|| format!("No district matches '{}'", query))?;
            print_selection(&selection, format)?;
        }
        Command::Weather(position) => {
            let selection = match position.point() {
                Some(point) => dashboard.refresh_location(Some(point)).await,
                None => dashboard.restore_location(None).await,
            };
            dashboard
                .refresh_weather(selection.location.point())
                .await
                .context("Failed to load forecast")?;
            let snapshot = dashboard.snapshot().await;
            match (format, snapshot.weather) {
                (ReportFormat::Json, weather) => println!("{}", render_json(&weather)?),
                (ReportFormat::Plain, Some(weather)) => {
                    print!("{}", render_alerts(&snapshot.alerts));
                    print!("{}", render_weather(&selection, &weather, now));
                }
                (ReportFormat::Plain, None) => {}
            }
        }
        Command::Dashboard(position) => {
            dashboard.start(position.point()).await;
            let snapshot = dashboard.snapshot().await;
            print!("{}", render_snapshot(&snapshot, format, now)?);
            if format == ReportFormat::Json {
                println!();
            }
            print_geocode_statistics(&dashboard.geocoder().stats());
        }
        Command::Forget => {
            store.clear().context("Failed to forget saved location")?;
            println!("Saved location cleared");
        }
    }
    Ok(())
}

fn print_selection(selection: &Selection, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => println!("{}", render_json(selection)?),
        ReportFormat::Plain => println!(
            "{} ({:.4}, {:.4}) [{}]",
            selection.location.name,
            selection.location.lat,
            selection.location.lon,
            selection.source
        ),
    }
    Ok(())
}

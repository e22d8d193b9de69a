//! Presentation for the command-line application.
//!
//! This module provides report rendering (plain or JSON) and statistics
//! printing used by the binary.

pub mod report;
pub mod statistics;

// Re-export public API
pub use report::{
    render_alerts, render_earthquakes, render_json, render_snapshot, render_weather,
};
pub use statistics::print_geocode_statistics;

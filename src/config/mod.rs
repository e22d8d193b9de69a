//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (region, model calibration, endpoints, timeouts)
//! - Logging option types and the library `Config`
//! - The command-line interface

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use cli::{Cli, Command, PositionArgs};
pub use types::{Config, LogFormat, LogLevel, ReportFormat};

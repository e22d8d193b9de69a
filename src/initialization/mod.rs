//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - The logger (plain or JSON)
//! - The HTTP client used by every remote service

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

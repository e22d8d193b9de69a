//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by the feed, forecast and geocoders.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent from config (Nominatim rejects anonymous clients)
/// - Per-request timeout from config
/// - A fixed connect timeout
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(TCP_CONNECT_TIMEOUT)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

//! Error type definitions.
//!
//! This module defines the error types surfaced by the pipelines and the
//! categories used to count provider failures and resolution outcomes.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error returned when a remote service cannot be read.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("Request to {url} failed: {source}")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The body could not be decoded into the expected JSON shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },
}

/// The field a seismic record was missing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// No geometry, fewer than three coordinates (lon, lat, depth), or a null one.
    #[error("missing epicenter coordinates")]
    Coordinates,
    /// No origin magnitude.
    #[error("missing magnitude")]
    Magnitude,
    /// No origin time.
    #[error("missing origin time")]
    Time,
}

/// Error returned by the earthquake ranking pipeline.
///
/// A single malformed record rejects the whole batch; callers never receive
/// a partially scored list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// A record lacks a field required for attribution or ordering.
    #[error("Malformed seismic event '{id}': {field}")]
    MalformedEvent {
        /// Feed identifier of the offending record
        id: String,
        /// Which field was missing
        field: MissingField,
    },
}

/// Error returned by a full earthquake refresh (fetch, then rank).
#[derive(Error, Debug)]
pub enum RefreshError {
    /// The feed could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The feed was fetched but contained a malformed record.
    #[error(transparent)]
    Rank(#[from] RankError),
}

/// Error reading or writing the saved location preference.
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// The preference file could not be read or written.
    #[error("Preference file {path}: {source}")]
    Io {
        /// Preference file path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The preference file does not hold a saved location.
    #[error("Preference file {path} is not a saved location: {source}")]
    Format {
        /// Preference file path
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Categories of network failures, used for logging and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
pub enum FailureKind {
    /// Request timed out
    Timeout,
    /// Connection could not be established
    Connect,
    /// Non-success HTTP status
    Status,
    /// Response body was not the expected JSON
    Decode,
    /// Request could not be built or sent
    Request,
    /// Anything else
    Other,
}

/// Which step of the geocoding chain produced the final name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
pub enum ResolutionSource {
    /// Detailed reverse geocoder (Nominatim)
    Primary,
    /// Lightweight geocoder (Open-Meteo)
    Secondary,
    /// Nearest entry of the in-process district gazetteer
    LocalFallback,
}

//! Error handling and geocoding statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, fetch, ranking, refresh, preferences)
//! - Failure categorization for client errors
//! - Thread-safe counters for the geocoding chain
//!
//! Only ranking failures reach callers of the pure pipelines; provider
//! failures are counted and absorbed by the geocoder.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::GeocodeStats;
pub use types::{
    FailureKind, FetchError, InitializationError, MissingField, PreferenceError, RankError,
    RefreshError, ResolutionSource,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_geocode_stats_initialization() {
        let stats = GeocodeStats::new();
        for source in ResolutionSource::iter() {
            assert_eq!(stats.get_resolution_count(source), 0);
        }
        for kind in FailureKind::iter() {
            assert_eq!(stats.get_failure_count(kind), 0);
        }
        assert_eq!(stats.empty_answers(), 0);
    }

    #[test]
    fn test_geocode_stats_increment() {
        let stats = GeocodeStats::new();
        stats.increment_resolution(ResolutionSource::LocalFallback);
        stats.increment_resolution(ResolutionSource::LocalFallback);
        stats.increment_resolution(ResolutionSource::Primary);
        stats.increment_failure(FailureKind::Timeout);
        stats.increment_empty_answer();

        assert_eq!(stats.get_resolution_count(ResolutionSource::LocalFallback), 2);
        assert_eq!(stats.get_resolution_count(ResolutionSource::Primary), 1);
        assert_eq!(stats.get_failure_count(FailureKind::Timeout), 1);
        assert_eq!(stats.total_resolutions(), 3);
        assert_eq!(stats.total_failures(), 1);
        assert_eq!(stats.empty_answers(), 1);
    }

    #[test]
    fn test_rank_error_is_distinct_from_fetch_error() {
        let err: RefreshError = RankError::MalformedEvent {
            id: "us7000abcd".to_string(),
            field: MissingField::Coordinates,
        }
        .into();
        assert!(matches!(err, RefreshError::Rank(_)));
        assert_eq!(
            err.to_string(),
            "Malformed seismic event 'us7000abcd': missing epicenter coordinates"
        );
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::Timeout.to_string(), "Timeout");
        assert_eq!(ResolutionSource::LocalFallback.to_string(), "LocalFallback");
    }
}

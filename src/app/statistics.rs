//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureKind, GeocodeStats, ResolutionSource};

/// Prints geocoding outcome and provider failure counts to the log.
///
/// Nothing is printed for an unused geocoder.
pub fn print_geocode_statistics(stats: &GeocodeStats) {
    let total_resolutions = stats.total_resolutions();
    let total_failures = stats.total_failures();

    if total_resolutions > 0 {
        info!("Geocoder resolutions ({} total):", total_resolutions);
        for source in ResolutionSource::iter() {
            let count = stats.get_resolution_count(source);
            if count > 0 {
                info!("   {}: {}", source, count);
            }
        }
    }

    if total_failures > 0 {
        info!("Geocoder provider failures ({} total):", total_failures);
        for kind in FailureKind::iter() {
            let count = stats.get_failure_count(kind);
            if count > 0 {
                info!("   {}: {}", kind, count);
            }
        }
    }

    if stats.empty_answers() > 0 {
        info!("Geocoder empty answers: {}", stats.empty_answers());
    }
}

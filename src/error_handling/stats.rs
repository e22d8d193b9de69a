//! Geocoding statistics tracking.
//!
//! Thread-safe counters for which step of the geocoding chain produced a
//! name and why providers were skipped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{FailureKind, ResolutionSource};

/// Thread-safe geocoding statistics tracker.
///
/// Every `ResolutionSource` and `FailureKind` is initialized to zero on
/// creation, so increments never allocate. Share it across tasks with `Arc`.
pub struct GeocodeStats {
    resolutions: HashMap<ResolutionSource, AtomicUsize>,
    failures: HashMap<FailureKind, AtomicUsize>,
    empty_answers: AtomicUsize,
}

impl GeocodeStats {
    pub fn new() -> Self {
        let mut resolutions = HashMap::new();
        for source in ResolutionSource::iter() {
            resolutions.insert(source, AtomicUsize::new(0));
        }

        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        GeocodeStats {
            resolutions,
            failures,
            empty_answers: AtomicUsize::new(0),
        }
    }

    /// Records which step produced the final name.
    pub fn increment_resolution(&self, source: ResolutionSource) {
        if let Some(counter) = self.resolutions.get(&source) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment resolution counter for {:?} which is not in the map",
                source
            );
        }
    }

    /// Records a provider that failed outright.
    pub fn increment_failure(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map",
                kind
            );
        }
    }

    /// Records a provider that answered but had no usable name.
    pub fn increment_empty_answer(&self) {
        self.empty_answers.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_resolution_count(&self, source: ResolutionSource) -> usize {
        self.resolutions
            .get(&source)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn get_failure_count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn empty_answers(&self) -> usize {
        self.empty_answers.load(Ordering::Relaxed)
    }

    pub fn total_resolutions(&self) -> usize {
        self.resolutions
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    pub fn total_failures(&self) -> usize {
        self.failures.values().map(|c| c.load(Ordering::Relaxed)).sum()
    }
}

impl Default for GeocodeStats {
    fn default() -> Self {
        Self::new()
    }
}

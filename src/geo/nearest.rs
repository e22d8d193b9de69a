//! Nearest-candidate search.
//!
//! A linear scan is plenty for the compiled-in tables (tens of entries). The
//! search is generic over anything `Located` so a spatial index can replace
//! it without touching callers.

use super::distance::{distance_km, GeoPoint};

/// Anything with a fixed position on the globe.
pub trait Located {
    fn location(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn location(&self) -> GeoPoint {
        *self
    }
}

/// The winning candidate of a nearest search and its rounded distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a, T> {
    pub item: &'a T,
    pub distance_km: f64,
}

/// Finds the candidate closest to `point` by [`distance_km`].
///
/// Ties keep the first candidate in iteration order. Candidates whose
/// distance is `NaN` never win. Returns `None` when nothing qualifies.
pub fn nearest<'a, T, I>(point: GeoPoint, candidates: I) -> Option<Nearest<'a, T>>
where
    T: Located + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut best: Option<Nearest<'a, T>> = None;
    let mut best_distance = f64::INFINITY;

    for candidate in candidates {
        let d = distance_km(point, candidate.location());
        if d < best_distance {
            best_distance = d;
            best = Some(Nearest {
                item: candidate,
                distance_km: d,
            });
        }
    }

    best
}

//! Felt-earthquake ranking pipeline.

use crate::config::{
    MAX_DISPLAYED_EARTHQUAKES, PERCEPTIBILITY_THRESHOLD, PRIMARY_CITY_NAME, REGION_MAX_LAT,
    REGION_MAX_LON, REGION_MIN_LAT, REGION_MIN_LON,
};
use crate::error_handling::{MissingField, RankError};
use crate::geo::{nearest, GeoPoint, ReferenceCity};

use super::felt::{attenuated_magnitude, felt_magnitude};
use super::types::{RawSeismicEvent, ScoredEarthquake};

/// Slack for subtraction noise, e.g. 2.3 - 104/80 = 0.9999999999999998.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// Whether `point` lies in the regional bounding box (edges inclusive).
pub fn in_region(point: GeoPoint) -> bool {
    (REGION_MIN_LAT..=REGION_MAX_LAT).contains(&point.latitude)
        && (REGION_MIN_LON..=REGION_MAX_LON).contains(&point.longitude)
}

/// Scores a raw feed by felt magnitude at the nearest of `cities`.
///
/// Keeps events inside the regional box whose attenuated magnitude reaches
/// the perceptibility threshold, newest first (stable for equal times), at
/// most fifteen of them.
///
/// # Errors
///
/// Returns `RankError::MalformedEvent` for the first record without
/// coordinates, or a regional record without magnitude or time. Nothing is
/// returned for the rest of the batch in that case.
pub fn rank_felt_earthquakes(
    events: &[RawSeismicEvent],
    cities: &[ReferenceCity],
) -> Result<Vec<ScoredEarthquake>, RankError> {
    let mut scored = Vec::new();

    for event in events {
        let malformed = |field| RankError::MalformedEvent {
            id: event.id.clone(),
            field,
        };

        let (epicenter, depth) = event
            .hypocenter()
            .ok_or_else(|| malformed(MissingField::Coordinates))?;
        if !in_region(epicenter) {
            continue;
        }

        let original_mag = event
            .properties
            .mag
            .ok_or_else(|| malformed(MissingField::Magnitude))?;
        let time = event
            .properties
            .time
            .ok_or_else(|| malformed(MissingField::Time))?;

        let (nearest_city, distance) = match nearest(epicenter, cities) {
            Some(found) => (found.item.name, found.distance_km),
            None => (PRIMARY_CITY_NAME, f64::INFINITY),
        };

        // Threshold on the unrounded value: 0.95 would otherwise round up to 1.0.
        let attenuated = attenuated_magnitude(original_mag, distance, depth);
        if attenuated.is_nan() || attenuated < PERCEPTIBILITY_THRESHOLD - THRESHOLD_TOLERANCE
        {
            continue;
        }

        let felt = event.properties.felt.unwrap_or(0);
        scored.push(ScoredEarthquake {
            id: event.id.clone(),
            original_mag,
            felt_mag: felt_magnitude(original_mag, distance, depth),
            place: event.properties.place.clone().unwrap_or_default(),
            nearest_city: nearest_city.to_string(),
            distance_from_nearest_city: distance,
            time,
            depth,
            epicenter,
            status: event
                .properties
                .status
                .clone()
                .unwrap_or_else(|| "automatic".to_string()),
            rms: event.properties.rms.unwrap_or(0.0),
            countries_affected: if felt > 0 {
                vec!["Bangladesh".to_string()]
            } else {
                Vec::new()
            },
        });
    }

    log::debug!(
        "{} of {} feed events are perceptible near reference cities",
        scored.len(),
        events.len()
    );

    // `sort_by` is stable: equal times keep feed order.
    scored.sort_by(|a, b| b.time.cmp(&a.time));
    scored.truncate(MAX_DISPLAYED_EARTHQUAKES);
    Ok(scored)
}

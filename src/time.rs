//! Bangladesh wall-clock helpers.
//!
//! Bangladesh Standard Time is a fixed UTC+06:00 with no daylight saving, so
//! a `FixedOffset` is enough; no timezone database is needed.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike, Utc};

use crate::config::BANGLADESH_UTC_OFFSET_SECS;

const SECONDS_PER_YEAR: f64 = 31_536_000.0;
const SECONDS_PER_MONTH: f64 = 2_592_000.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// The UTC+06:00 offset.
pub fn bangladesh_offset() -> FixedOffset {
    FixedOffset::east_opt(BANGLADESH_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current time in Dhaka.
pub fn bangladesh_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&bangladesh_offset())
}

/// `now` in Dhaka time with minutes and seconds zeroed.
pub fn truncate_to_hour(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let local = now.with_timezone(&bangladesh_offset());
    local
        .with_nanosecond(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_minute(0))
        .unwrap_or(local)
}

/// Parses an Open-Meteo local timestamp (`2024-05-01T14:00`) as Dhaka time.
pub fn parse_local_time(value: &str) -> Option<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    bangladesh_offset().from_local_datetime(&naive).single()
}

/// Coarse "how long ago" label, e.g. "3 hours ago".
///
/// Each unit is used only once strictly more than one of it has elapsed, so
/// exactly one hour renders as "60 minutes ago".
pub fn time_ago(event_ms: i64, now_ms: i64) -> String {
    let seconds = (now_ms - event_ms).div_euclid(1000) as f64;

    for (unit, label) in [
        (SECONDS_PER_YEAR, "years"),
        (SECONDS_PER_MONTH, "months"),
        (SECONDS_PER_DAY, "days"),
        (SECONDS_PER_HOUR, "hours"),
        (SECONDS_PER_MINUTE, "minutes"),
    ] {
        let interval = seconds / unit;
        if interval > 1.0 {
            return format!("{} {} ago", interval.floor(), label);
        }
    }
    format!("{} seconds ago", seconds)
}

/// Short label for a time in the next day: "Now", "in 25 min", "in 3h".
///
/// Past times are "Now"; times a day or more ahead get an empty label.
pub fn relative_time(target: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> String {
    let diff_ms = (target - now).num_milliseconds();
    if diff_ms <= 0 {
        return "Now".to_string();
    }

    let hours = diff_ms / 3_600_000;
    let minutes = (diff_ms % 3_600_000) / 60_000;
    if hours == 0 {
        format!("in {} min", minutes)
    } else if hours < 24 {
        format!("in {}h", hours)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dhaka(value: &str) -> DateTime<FixedOffset> {
        parse_local_time(value).unwrap()
    }

    #[test]
    fn test_offset_is_six_hours() {
        assert_eq!(bangladesh_offset().local_minus_utc(), 6 * 3600);
    }

    #[test]
    fn test_parse_local_time_is_dhaka() {
        let t = dhaka("2024-05-01T14:00");
        assert_eq!(t.with_timezone(&Utc).to_rfc3339(), "2024-05-01T08:00:00+00:00");
        assert!(parse_local_time("not a time").is_none());
    }

    #[test]
    fn test_truncate_to_hour_uses_dhaka_clock() {
        let utc = Utc.with_ymd_and_hms(2024, 5, 1, 20, 42, 17).unwrap();
        let truncated = truncate_to_hour(utc.fixed_offset());
        // 20:42 UTC is 02:42 the next day in Dhaka.
        assert_eq!(truncated, dhaka("2024-05-02T02:00"));
    }

    #[test]
    fn test_time_ago_units() {
        let now = 1_700_000_000_000;
        assert_eq!(time_ago(now - 30_000, now), "30 seconds ago");
        assert_eq!(time_ago(now - 60_000, now), "60 seconds ago");
        assert_eq!(time_ago(now - 5 * 60_000, now), "5 minutes ago");
        assert_eq!(time_ago(now - 3_600_000, now), "60 minutes ago");
        assert_eq!(time_ago(now - 3 * 3_600_000, now), "3 hours ago");
        assert_eq!(time_ago(now - 3 * 86_400_000, now), "3 days ago");
        assert_eq!(time_ago(now - 40 * 86_400_000, now), "1 months ago");
        assert_eq!(time_ago(now - 800 * 86_400_000, now), "2 years ago");
    }

    #[test]
    fn test_relative_time_labels() {
        let now = dhaka("2024-05-01T14:20");
        assert_eq!(relative_time(dhaka("2024-05-01T14:00"), now), "Now");
        assert_eq!(relative_time(now, now), "Now");
        assert_eq!(relative_time(dhaka("2024-05-01T15:00"), now), "in 40 min");
        assert_eq!(relative_time(dhaka("2024-05-01T18:00"), now), "in 3h");
        assert_eq!(relative_time(dhaka("2024-05-03T18:00"), now), "");
    }
}

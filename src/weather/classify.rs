//! WMO weather-code classification and seasonal warnings.

use chrono::{DateTime, Datelike, FixedOffset};
use strum_macros::{Display, EnumIter};

use crate::time::bangladesh_offset;

use super::types::WeatherAlert;

/// Coarse weather category derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum WeatherType {
    Sunny,
    Cloudy,
    Rain,
    Storm,
    Fog,
    Snow,
}

impl WeatherType {
    /// Classifies a WMO code. Unknown codes count as sunny.
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => WeatherType::Sunny,
            1..=3 => WeatherType::Cloudy,
            45 | 48 => WeatherType::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => WeatherType::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => WeatherType::Snow,
            95 | 96 | 99 => WeatherType::Storm,
            _ => WeatherType::Sunny,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WeatherType::Sunny => "☀️",
            WeatherType::Cloudy => "☁️",
            WeatherType::Fog => "🌫️",
            WeatherType::Rain => "🌧️",
            WeatherType::Storm => "⛈️",
            WeatherType::Snow => "❄️",
        }
    }
}

/// Bay of Bengal cyclone months (pre- and post-monsoon).
const CYCLONE_MONTHS: [u32; 4] = [5, 6, 10, 11];

/// Standing advisory raised during cyclone season, judged by Dhaka date.
pub fn cyclone_season_alert(now: DateTime<FixedOffset>) -> Option<WeatherAlert> {
    let month = now.with_timezone(&bangladesh_offset()).month();
    if !CYCLONE_MONTHS.contains(&month) {
        return None;
    }

    Some(WeatherAlert {
        source: "System".to_string(),
        alert_type: "Cyclone Season".to_string(),
        description: "Currently in Bay of Bengal cyclone season. Stay alert for weather updates."
            .to_string(),
        severity: "Minor".to_string(),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_local_time;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_weather_code_classes() {
        assert_eq!(WeatherType::from_code(0), WeatherType::Sunny);
        assert_eq!(WeatherType::from_code(2), WeatherType::Cloudy);
        assert_eq!(WeatherType::from_code(48), WeatherType::Fog);
        assert_eq!(WeatherType::from_code(53), WeatherType::Rain);
        assert_eq!(WeatherType::from_code(82), WeatherType::Rain);
        assert_eq!(WeatherType::from_code(77), WeatherType::Snow);
        assert_eq!(WeatherType::from_code(96), WeatherType::Storm);
    }

    #[test]
    fn test_unlisted_codes_are_sunny() {
        // Freezing drizzle and freezing rain are not in any class.
        for code in [4, 56, 57, 66, 67, 94, 200] {
            assert_eq!(WeatherType::from_code(code), WeatherType::Sunny, "code {}", code);
        }
    }

    #[test]
    fn test_cyclone_season_months() {
        let may = parse_local_time("2024-05-15T12:00").unwrap();
        let alert = cyclone_season_alert(may).unwrap();
        assert_eq!(alert.source, "System");
        assert_eq!(alert.alert_type, "Cyclone Season");
        assert_eq!(alert.severity, "Minor");

        assert!(cyclone_season_alert(parse_local_time("2024-11-30T23:00").unwrap()).is_some());
        assert!(cyclone_season_alert(parse_local_time("2024-07-01T00:00").unwrap()).is_none());
        assert!(cyclone_season_alert(parse_local_time("2024-12-01T00:00").unwrap()).is_none());
    }

    #[test]
    fn test_cyclone_season_uses_dhaka_date() {
        // 30 Apr 20:00 UTC is already 1 May in Dhaka.
        let utc = Utc.with_ymd_and_hms(2024, 4, 30, 20, 0, 0).unwrap();
        assert!(cyclone_season_alert(utc.fixed_offset()).is_some());
    }
}

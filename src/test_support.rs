use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::weather::{CurrentConditions, DailySummary, LoadedWeather, ThemeTag};

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date fixture")
}

/// Noon UTC on Thursday 2026-02-12.
pub(crate) fn test_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_770_897_600, 0).expect("valid instant fixture")
}

pub(crate) fn sample_current() -> CurrentConditions {
    CurrentConditions {
        name: "London".to_string(),
        country: "GB".to_string(),
        main: "Clouds".to_string(),
        description: "broken clouds".to_string(),
        icon: "04d".to_string(),
        temperature_c: 15.5,
        feels_like_c: 14.2,
        wind_speed_ms: 5.2,
        humidity_pct: 72,
        visibility_km: Some(10.0),
        pressure_hpa: 1013,
        sunrise: 1_770_880_380,
        sunset: 1_770_916_200,
        utc_offset_secs: 0,
    }
}

pub(crate) fn sample_forecast() -> Vec<DailySummary> {
    vec![
        DailySummary {
            date: date("2026-02-12"),
            temp_min_c: 9.4,
            temp_max_c: 17.6,
            icon: "10d".to_string(),
        },
        DailySummary {
            date: date("2026-02-13"),
            temp_min_c: 7.0,
            temp_max_c: 12.5,
            icon: "04d".to_string(),
        },
        DailySummary {
            date: date("2026-02-14"),
            temp_min_c: -1.6,
            temp_max_c: 4.4,
            icon: "13d".to_string(),
        },
    ]
}

pub(crate) fn sample_loaded() -> LoadedWeather {
    let current = sample_current();
    LoadedWeather {
        theme: ThemeTag::Clouds,
        current,
        forecast: sample_forecast(),
    }
}

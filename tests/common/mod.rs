#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use skyverse::{
    data::WeatherClient,
    domain::weather::{CurrentConditions, DailySummary, LoadedWeather, ThemeTag},
};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

pub const LONDON_CURRENT: &str = r#"{
    "coord": { "lon": -0.1257, "lat": 51.5085 },
    "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
    "main": { "temp": 15.5, "feels_like": 14.2, "temp_min": 14.0, "temp_max": 17.1, "pressure": 1013, "humidity": 72 },
    "visibility": 10000,
    "wind": { "speed": 5.2, "deg": 240 },
    "dt": 1770897600,
    "sys": { "country": "GB", "sunrise": 1770880380, "sunset": 1770916200 },
    "timezone": 0,
    "name": "London",
    "cod": 200
}"#;

/// Three days of 3-hour samples starting on 2026-02-12.
pub const LONDON_FORECAST: &str = r#"{
    "cod": "200",
    "cnt": 6,
    "list": [
        { "dt": 1770886800, "dt_txt": "2026-02-12 09:00:00", "main": { "temp": 9.4 }, "weather": [{ "main": "Clouds", "icon": "04d" }] },
        { "dt": 1770897600, "dt_txt": "2026-02-12 12:00:00", "main": { "temp": 17.6 }, "weather": [{ "main": "Rain", "icon": "10d" }] },
        { "dt": 1770973200, "dt_txt": "2026-02-13 09:00:00", "main": { "temp": 7.0 }, "weather": [{ "main": "Clouds", "icon": "03d" }] },
        { "dt": 1770984000, "dt_txt": "2026-02-13 12:00:00", "main": { "temp": 12.5 }, "weather": [{ "main": "Clouds", "icon": "04d" }] },
        { "dt": 1771059600, "dt_txt": "2026-02-14 09:00:00", "main": { "temp": -1.6 }, "weather": [{ "main": "Snow", "icon": "13d" }] },
        { "dt": 1771070400, "dt_txt": "2026-02-14 12:00:00", "main": { "temp": 4.4 }, "weather": [{ "main": "Snow", "icon": "13d" }] }
    ]
}"#;

pub fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_url(server.uri(), API_KEY).expect("client builds")
}

/// Noon UTC on Thursday 2026-02-12.
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_770_897_600, 0).expect("valid instant")
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
}

pub fn london_loaded() -> LoadedWeather {
    LoadedWeather {
        current: CurrentConditions {
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
        },
        forecast: vec![
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
        ],
        theme: ThemeTag::Clouds,
    }
}

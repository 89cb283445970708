use serde::Deserialize;

use super::{client::WeatherClient, error::WeatherError};
use crate::domain::weather::{CurrentConditions, LocationQuery, visibility_km};

impl WeatherClient {
    pub async fn fetch_current(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentConditions, WeatherError> {
        let payload: CurrentResponse = self.get_json(self.weather_url(), query).await?;
        let current = normalize_current(payload)?;
        tracing::debug!(
            location = %current.name,
            country = %current.country,
            temp_c = current.temperature_c,
            "current conditions decoded"
        );
        Ok(current)
    }
}

fn normalize_current(payload: CurrentResponse) -> Result<CurrentConditions, WeatherError> {
    let condition = payload
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Decode("no weather condition in response".to_string()))?;

    Ok(CurrentConditions {
        name: payload.name,
        country: payload.sys.country,
        main: condition.main,
        description: condition.description,
        icon: condition.icon,
        temperature_c: payload.main.temp,
        feels_like_c: payload.main.feels_like,
        wind_speed_ms: payload.wind.speed,
        humidity_pct: payload.main.humidity,
        visibility_km: payload.visibility.map(visibility_km),
        pressure_hpa: payload.main.pressure,
        sunrise: payload.sys.sunrise,
        sunset: payload.sys.sunset,
        utc_offset_secs: payload.timezone,
    })
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    sys: SysBlock,
    timezone: i32,
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
    visibility: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    // Absent for coordinates over open water.
    #[serde(default)]
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

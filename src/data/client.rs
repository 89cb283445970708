use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::WeatherError;
use crate::domain::weather::LocationQuery;

pub const API_BASE: &str = "https://api.openweathermap.org/data/2.5";
pub const ICON_HOST: &str = "https://openweathermap.org";

const UNITS: &str = "metric";
const USER_AGENT: &str = concat!("skyverse/", env!("CARGO_PKG_VERSION"));

/// OpenWeatherMap client for the current-conditions and 5-day/3-hour endpoints.
///
/// No request timeout is configured; calls wait as long as the transport does.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    weather_url: String,
    forecast_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/');
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("building weather http client failed")?;

        Ok(Self {
            client,
            weather_url: format!("{base_url}/weather"),
            forecast_url: format!("{base_url}/forecast"),
            api_key: api_key.into(),
        })
    }

    pub(crate) fn weather_url(&self) -> &str {
        &self.weather_url
    }

    pub(crate) fn forecast_url(&self) -> &str {
        &self.forecast_url
    }

    /// GETs `url` for `query` and decodes the JSON body, classifying failures.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &LocationQuery,
    ) -> Result<T, WeatherError> {
        let mut params = query.query_pairs();
        params.push(("appid", self.api_key.clone()));
        params.push(("units", UNITS.to_string()));

        tracing::debug!(url, location = %query.label(), "requesting weather data");

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(WeatherError::Network)?;

        let status = response.status();
        tracing::debug!(url, status = %status, "weather service responded");
        if !status.is_success() {
            return Err(WeatherError::from_status(status, &query.label()));
        }

        let body = response.text().await.map_err(WeatherError::Network)?;
        serde_json::from_str(&body).map_err(|err| WeatherError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_derived_from_base() {
        let client = WeatherClient::with_base_url("http://localhost:8080/data/2.5/", "key")
            .expect("client");
        assert_eq!(client.weather_url(), "http://localhost:8080/data/2.5/weather");
        assert_eq!(
            client.forecast_url(),
            "http://localhost:8080/data/2.5/forecast"
        );
    }

    #[test]
    fn query_pairs_follow_location_kind() {
        let by_name = LocationQuery::by_name("New York").query_pairs();
        assert_eq!(by_name, vec![("q", "New York".to_string())]);

        let by_coords = LocationQuery::by_coords(40.7128, -74.006).query_pairs();
        assert_eq!(
            by_coords,
            vec![("lat", "40.7128".to_string()), ("lon", "-74.006".to_string())]
        );
    }
}

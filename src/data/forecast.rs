use serde::Deserialize;

use super::{client::WeatherClient, error::WeatherError};
use crate::domain::weather::{DailySummary, ForecastSample, LocationQuery, aggregate_forecast};

impl WeatherClient {
    pub async fn fetch_forecast_samples(
        &self,
        query: &LocationQuery,
    ) -> Result<Vec<ForecastSample>, WeatherError> {
        let payload: ForecastResponse = self.get_json(self.forecast_url(), query).await?;
        Ok(parse_samples(payload.list))
    }

    /// Daily summaries for `query`. Every failure comes back as
    /// [`WeatherError::ForecastUnavailable`].
    pub async fn fetch_forecast_for(
        &self,
        query: &LocationQuery,
    ) -> Result<Vec<DailySummary>, WeatherError> {
        let samples = self
            .fetch_forecast_samples(query)
            .await
            .map_err(WeatherError::forecast_unavailable)?;
        let days = aggregate_forecast(&samples);
        tracing::debug!(
            samples = samples.len(),
            days = days.len(),
            "forecast aggregated"
        );
        Ok(days)
    }
}

fn parse_samples(entries: Vec<ForecastEntry>) -> Vec<ForecastSample> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let icon = entry.weather.into_iter().next()?.icon;
            Some(ForecastSample {
                timestamp: entry.dt_txt,
                temperature_c: entry.main.temp,
                icon,
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt_txt: String,
    main: ForecastMain,
    weather: Vec<ForecastCondition>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastCondition {
    icon: String,
}

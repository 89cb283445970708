use crate::{
    data::{WeatherClient, WeatherError},
    domain::weather::{LoadedWeather, LocationQuery},
};

/// Loads current conditions, then the forecast for the same location.
///
/// A current-conditions failure aborts the load and the forecast is never
/// requested. Forecast failures only produce a warning and an empty forecast.
pub async fn load_weather(
    client: &WeatherClient,
    query: &LocationQuery,
) -> Result<LoadedWeather, WeatherError> {
    let current = client.fetch_current(query).await?;

    let forecast = client.fetch_forecast_for(query).await.unwrap_or_else(|err| {
        tracing::warn!(
            location = %query.label(),
            kind = err.kind(),
            error = %err,
            "forecast fetch failed; showing current conditions only"
        );
        Vec::new()
    });

    let theme = current.theme();
    tracing::info!(
        location = %current.name,
        theme = %theme,
        forecast_days = forecast.len(),
        "weather loaded"
    );

    Ok(LoadedWeather {
        current,
        forecast,
        theme,
    })
}

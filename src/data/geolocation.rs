use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::error::GeolocationError;
use crate::domain::weather::LocationQuery;

pub const GEOLOCATION_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn into_query(self) -> LocationQuery {
        LocationQuery::by_coords(self.latitude, self.longitude)
    }
}

/// IP-based position lookup. A client without transport reports `Unsupported`.
#[derive(Debug, Clone)]
pub struct GeolocationClient {
    client: Option<Client>,
    url: String,
}

impl GeolocationClient {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::builder().build().ok(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            client: None,
            url: String::new(),
        }
    }

    pub async fn locate(&self) -> Result<Coordinates, GeolocationError> {
        let Some(client) = &self.client else {
            return Err(GeolocationError::Unsupported);
        };

        let response = client.get(&self.url).send().await.map_err(|err| {
            tracing::warn!(error = %err, "geolocation request failed");
            GeolocationError::Unavailable
        })?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(GeolocationError::Denied);
        }
        if !status.is_success() {
            tracing::warn!(status = %status, "geolocation service returned an error");
            return Err(GeolocationError::Unavailable);
        }

        let payload: GeolocationResponse = response
            .json()
            .await
            .map_err(|_| GeolocationError::Unavailable)?;
        let (Some(latitude), Some(longitude)) = (payload.latitude, payload.longitude) else {
            return Err(GeolocationError::Unavailable);
        };

        tracing::debug!(
            latitude,
            longitude,
            city = payload.city.as_deref().unwrap_or("unknown"),
            "position resolved"
        );
        Ok(Coordinates {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeolocationResponse {
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_client_is_unsupported() {
        let client = GeolocationClient::disabled();
        assert_eq!(client.locate().await, Err(GeolocationError::Unsupported));
    }

    #[test]
    fn coordinates_become_coordinate_queries() {
        let coords = Coordinates {
            latitude: 35.6762,
            longitude: 139.6503,
        };
        assert_eq!(
            coords.into_query(),
            LocationQuery::by_coords(35.6762, 139.6503)
        );
    }
}

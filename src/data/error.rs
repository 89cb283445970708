use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City \"{0}\" not found. Please check the spelling and try again.")]
    NotFound(String),

    #[error("API rate limit exceeded. Please wait a moment and try again.")]
    RateLimited,

    #[error("HTTP Error: {status} - {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Failed to fetch weather data. Please check your connection.")]
    Network(#[source] reqwest::Error),

    #[error("Unexpected response from the weather service: {0}")]
    Decode(String),

    #[error("Forecast unavailable: {0}")]
    ForecastUnavailable(#[source] Box<WeatherError>),
}

impl WeatherError {
    /// Classifies a non-success status from a lookup of `label`.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, label: &str) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound(label.to_string()),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            other => Self::Http {
                status: other.as_u16(),
                status_text: other.canonical_reason().unwrap_or_default().to_string(),
            },
        }
    }

    #[must_use]
    pub fn forecast_unavailable(self) -> Self {
        if matches!(self, Self::ForecastUnavailable(_)) {
            return self;
        }
        Self::ForecastUnavailable(Box::new(self))
    }

    /// Short machine-friendly tag for log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::RateLimited => "rate_limited",
            Self::Http { .. } => "http",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::ForecastUnavailable(_) => "forecast_unavailable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Location access denied. Please enable location permissions.")]
    Denied,

    #[error("Geolocation is not supported on this system.")]
    Unsupported,

    #[error("Unable to get your location.")]
    Unavailable,
}

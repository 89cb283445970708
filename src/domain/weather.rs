use chrono::NaiveDate;

mod aggregate;
mod conditions;
mod conversions;
mod countries;

pub use aggregate::{MAX_FORECAST_DAYS, aggregate_forecast};
pub use conditions::{ThemeTag, classify_theme, icon_url, is_night_icon};
pub use conversions::{
    day_label, format_local_time, local_date, parse_calendar_date, parse_sample_time, round_temp,
    sun_position_percent, visibility_km,
};
pub use countries::country_name;

#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    ByName { name: String },
    ByCoords { lat: f64, lon: f64 },
}

impl LocationQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName { name: name.into() }
    }

    #[must_use]
    pub fn by_coords(lat: f64, lon: f64) -> Self {
        Self::ByCoords { lat, lon }
    }

    /// Human label used in messages; coordinates are shown to four decimals.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::ByName { name } => name.clone(),
            Self::ByCoords { lat, lon } => format!("{lat:.4}, {lon:.4}"),
        }
    }

    /// Name to remember for retry once a lookup has succeeded.
    ///
    /// Name lookups keep what the user typed; coordinate lookups adopt the
    /// name the API resolved them to.
    #[must_use]
    pub fn resolved_name(&self, current: &CurrentConditions) -> String {
        match self {
            Self::ByName { name } => name.clone(),
            Self::ByCoords { .. } => current.name.clone(),
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ByName { name } => vec![("q", name.clone())],
            Self::ByCoords { lat, lon } => vec![("lat", lat.to_string()), ("lon", lon.to_string())],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub name: String,
    pub country: String,
    pub main: String,
    pub description: String,
    pub icon: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub wind_speed_ms: f64,
    pub humidity_pct: u8,
    pub visibility_km: Option<f64>,
    pub pressure_hpa: u32,
    pub sunrise: i64,
    pub sunset: i64,
    pub utc_offset_secs: i32,
}

impl CurrentConditions {
    #[must_use]
    pub fn theme(&self) -> ThemeTag {
        classify_theme(&self.main, &self.icon)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: String,
    pub temperature_c: f64,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedWeather {
    pub current: CurrentConditions,
    pub forecast: Vec<DailySummary>,
    pub theme: ThemeTag,
}

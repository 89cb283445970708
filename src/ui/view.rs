use chrono::{DateTime, TimeZone, Utc};

use super::theme::{ShapePalette, shape_palette};
use crate::domain::weather::{
    LoadedWeather, ThemeTag, country_name, day_label, format_local_time, icon_url, local_date,
    round_temp, sun_position_percent,
};

/// Display-ready strings for one loaded location. Rounding happens here and
/// nowhere earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub city: String,
    pub country: String,
    pub description: String,
    pub icon_url: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub wind: String,
    pub humidity: String,
    pub visibility: String,
    pub pressure: String,
    pub sunrise: String,
    pub sunset: String,
    pub sun_percent: f64,
    pub theme: ThemeTag,
    pub palette: ShapePalette,
    pub forecast: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    pub label: String,
    pub icon_url: String,
    pub high: i64,
    pub low: i64,
}

impl DashboardView {
    #[must_use]
    pub fn build(weather: &LoadedWeather, icon_host: &str, now: DateTime<Utc>) -> Self {
        let current = &weather.current;
        let today = local_date(now, current.utc_offset_secs);

        Self {
            city: current.name.clone(),
            country: country_name(&current.country).to_string(),
            description: current.description.clone(),
            icon_url: icon_url(icon_host, &current.icon),
            temperature: round_temp(current.temperature_c),
            feels_like: round_temp(current.feels_like_c),
            wind: format!("{} m/s", current.wind_speed_ms),
            humidity: format!("{}%", current.humidity_pct),
            visibility: current
                .visibility_km
                .map_or_else(|| "--".to_string(), |km| format!("{km:.1} km")),
            pressure: format!("{} hPa", current.pressure_hpa),
            sunrise: format_local_time(current.sunrise, current.utc_offset_secs),
            sunset: format_local_time(current.sunset, current.utc_offset_secs),
            sun_percent: sun_position_percent(
                current.sunrise,
                current.sunset,
                current.utc_offset_secs,
                now.timestamp(),
            ),
            theme: weather.theme,
            palette: shape_palette(&current.main, weather.theme.is_night()),
            forecast: weather
                .forecast
                .iter()
                .map(|day| ForecastCard {
                    label: day_label(day.date, today),
                    icon_url: icon_url(icon_host, &day.icon),
                    high: round_temp(day.temp_max_c),
                    low: round_temp(day.temp_min_c),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn heading(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}

/// Date and time lines of the dashboard clock, e.g. `Monday, Oct 19` / `06:42 PM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockLabel {
    pub date: String,
    pub time: String,
}

impl ClockLabel {
    #[must_use]
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: now.format("%A, %b %-d").to_string(),
            time: now.format("%I:%M %p").to_string(),
        }
    }
}

use std::io::IsTerminal;

use crate::{
    cli::{Cli, ColorArg},
    domain::weather::LocationQuery,
};

/// Quick-select cities offered as `:1`..`:6`.
pub const QUICK_CITIES: [&str; 6] = ["London", "New York", "Tokyo", "Paris", "Dubai", "Sydney"];

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub api_key: String,
    pub api_base: String,
    pub icon_host: String,
    pub geolocation_url: Option<String>,
    pub color: bool,
    pub default_city: String,
    pub initial_query: LocationQuery,
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let color = match cli.effective_color_mode() {
            ColorArg::Always => true,
            ColorArg::Never => false,
            ColorArg::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
        let default_city = cli.default_city();
        let initial_query = match (cli.lat, cli.lon) {
            (Some(lat), Some(lon)) => LocationQuery::by_coords(lat, lon),
            _ => LocationQuery::by_name(default_city.clone()),
        };

        Self {
            api_key: cli.api_key.clone(),
            api_base: cli.api_base.clone(),
            icon_host: cli.icon_host.clone(),
            geolocation_url: (!cli.no_geolocation).then(|| cli.geolocation_url.clone()),
            color,
            default_city,
            initial_query,
        }
    }
}

#[must_use]
pub fn quick_city(slot: usize) -> Option<&'static str> {
    slot.checked_sub(1).and_then(|idx| QUICK_CITIES.get(idx).copied())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["skyverse", "--api-key", "k"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn coordinates_take_precedence_over_city() {
        let settings = RuntimeSettings::from_cli(&cli(&["Paris", "--lat", "1.5", "--lon", "2.5"]));
        assert_eq!(settings.initial_query, LocationQuery::by_coords(1.5, 2.5));
        assert_eq!(settings.default_city, "Paris");
    }

    #[test]
    fn city_defaults_to_london() {
        let settings = RuntimeSettings::from_cli(&cli(&["--color", "never"]));
        assert_eq!(settings.initial_query, LocationQuery::by_name("London"));
        assert!(!settings.color);
    }

    #[test]
    fn geolocation_can_be_disabled() {
        assert!(
            RuntimeSettings::from_cli(&cli(&["--no-geolocation"]))
                .geolocation_url
                .is_none()
        );
        assert!(RuntimeSettings::from_cli(&cli(&[])).geolocation_url.is_some());
    }

    #[test]
    fn quick_city_slots_are_one_based() {
        assert_eq!(quick_city(1), Some("London"));
        assert_eq!(quick_city(6), Some("Sydney"));
        assert_eq!(quick_city(0), None);
        assert_eq!(quick_city(7), None);
    }
}

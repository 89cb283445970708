#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

use crate::data::{client::API_BASE, client::ICON_HOST, geolocation::GEOLOCATION_URL};

pub const DEFAULT_CITY: &str = "London";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skyverse",
    version,
    about = "Weather dashboard for the terminal backed by OpenWeatherMap"
)]
pub struct Cli {
    /// City name (default: London)
    pub city: Option<String>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Base URL of the weather API
    #[arg(long, env = "SKYVERSE_API_BASE", default_value = API_BASE)]
    pub api_base: String,

    /// Host serving condition icons
    #[arg(long, env = "SKYVERSE_ICON_HOST", default_value = ICON_HOST)]
    pub icon_host: String,

    /// IP geolocation service used by `:here`
    #[arg(long, default_value = GEOLOCATION_URL)]
    pub geolocation_url: String,

    /// Disable the `:here` lookup
    #[arg(long)]
    pub no_geolocation: bool,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Print one weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    #[must_use]
    pub fn default_city(&self) -> String {
        self.city.clone().unwrap_or_else(|| DEFAULT_CITY.to_string())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => {}
        }
        if self.api_key.trim().is_empty() {
            anyhow::bail!("an OpenWeatherMap API key is required (--api-key or OPENWEATHER_API_KEY)");
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, ColorArg};

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["skyverse", "--api-key", "test-key"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults_point_at_openweathermap() {
        let cli = parse(&[]);
        assert_eq!(cli.default_city(), "London");
        assert_eq!(cli.api_base, "https://api.openweathermap.org/data/2.5");
        assert_eq!(cli.icon_host, "https://openweathermap.org");
        assert!(!cli.one_shot);
    }

    #[test]
    fn parses_color_enum_values() {
        let cli = parse(&["--color", "always"]);
        assert_eq!(cli.color, ColorArg::Always);
        assert!(!cli.no_color);
    }

    #[test]
    fn rejects_color_and_no_color_together() {
        let err = Cli::try_parse_from([
            "skyverse",
            "--api-key",
            "k",
            "--color",
            "always",
            "--no-color",
        ])
        .expect_err("expected conflict");
        let rendered = err.to_string();
        assert!(rendered.contains("--color"));
        assert!(rendered.contains("--no-color"));
    }

    #[test]
    fn effective_color_mode_prefers_no_color() {
        assert_eq!(parse(&["--no-color"]).effective_color_mode(), ColorArg::Never);
        assert_eq!(parse(&[]).effective_color_mode(), ColorArg::Auto);
    }

    #[test]
    fn validate_requires_paired_coordinates() {
        let cli = parse(&["--lat", "51.5"]);
        assert!(cli.validate().is_err());

        let cli = parse(&["--lat", "51.5", "--lon", "-0.12"]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.lon, Some(-0.12));
    }

    #[test]
    fn validate_rejects_blank_api_key() {
        let cli = Cli::parse_from(["skyverse", "--api-key", "  "]);
        assert!(cli.validate().is_err());
    }
}

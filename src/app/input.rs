use thiserror::Error;

use super::settings::{QUICK_CITIES, quick_city};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    QuickCity(&'static str),
    Locate,
    Coordinates { lat: f64, lon: f64 },
    Retry,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command \"{0}\". Type :help for the list of commands.")]
    Unknown(String),

    #[error("Quick city slot must be between 1 and {}.", QUICK_CITIES.len())]
    NoSuchSlot,

    #[error("Usage: :at <latitude> <longitude>")]
    BadCoordinates,
}

pub const HELP: &str = "\
<city>        search by city name
:1 .. :6      quick cities (London, New York, Tokyo, Paris, Dubai, Sydney)
:here         use your approximate location
:at LAT LON   look up coordinates
:retry, :r    reload the last location
:help         show this help
:quit, :q     exit";

/// Parses one prompt line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Some(Command::Search(line.to_string())));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let command = match name {
        "q" | "quit" => Command::Quit,
        "r" | "retry" => Command::Retry,
        "h" | "help" => Command::Help,
        "here" => Command::Locate,
        "at" => parse_coordinates(parts.next(), parts.next())?,
        slot if slot.chars().all(|c| c.is_ascii_digit()) && !slot.is_empty() => {
            let index = slot.parse::<usize>().map_err(|_| CommandError::NoSuchSlot)?;
            Command::QuickCity(quick_city(index).ok_or(CommandError::NoSuchSlot)?)
        }
        other => return Err(CommandError::Unknown(format!(":{other}"))),
    };
    Ok(Some(command))
}

fn parse_coordinates(lat: Option<&str>, lon: Option<&str>) -> Result<Command, CommandError> {
    let (Some(lat), Some(lon)) = (lat, lon) else {
        return Err(CommandError::BadCoordinates);
    };
    let lat = lat.parse::<f64>().map_err(|_| CommandError::BadCoordinates)?;
    let lon = lon.parse::<f64>().map_err(|_| CommandError::BadCoordinates)?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(CommandError::BadCoordinates);
    }
    Ok(Command::Coordinates { lat, lon })
}

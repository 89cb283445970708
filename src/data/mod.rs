pub mod client;
pub mod current;
pub mod error;
pub mod forecast;
pub mod geolocation;

pub use client::WeatherClient;
pub use error::{GeolocationError, WeatherError};

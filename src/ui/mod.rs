pub mod text;
pub mod theme;
pub mod view;
pub mod widgets;

use std::io;

use chrono::{DateTime, Utc};

use crate::domain::weather::LoadedWeather;

pub use text::TextPresenter;
pub use view::{ClockLabel, DashboardView, ForecastCard};

/// Output side of the dashboard. The app state machine decides *what* to show
/// and a presenter decides *how*.
pub trait Presenter {
    fn show_loading(&mut self, label: &str) -> io::Result<()>;

    fn show_error(&mut self, message: &str) -> io::Result<()>;

    fn show_content(&mut self, weather: &LoadedWeather, now: DateTime<Utc>) -> io::Result<()>;

    /// Informational text that does not change the display mode (help, input mistakes).
    fn show_notice(&mut self, message: &str) -> io::Result<()>;

    fn tick_clock(&mut self, _clock: &ClockLabel) -> io::Result<()> {
        Ok(())
    }
}

use anyhow::Result;
use chrono::{Local, Utc};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, spawn_load, spawn_locate, start_clock_task},
        input::{Command, HELP, parse_command},
        settings::RuntimeSettings,
    },
    data::{WeatherClient, geolocation::GeolocationClient},
    domain::weather::{LoadedWeather, LocationQuery},
    ui::{ClockLabel, Presenter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Error,
    Content,
    Quit,
}

/// Network clients shared by every load.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub weather: WeatherClient,
    pub geolocation: GeolocationClient,
}

impl AppServices {
    pub fn from_settings(settings: &RuntimeSettings) -> Result<Self> {
        Ok(Self {
            weather: WeatherClient::with_base_url(&settings.api_base, &settings.api_key)?,
            geolocation: settings
                .geolocation_url
                .as_ref()
                .map_or_else(GeolocationClient::disabled, |url| {
                    GeolocationClient::with_url(url.as_str())
                }),
        })
    }
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    /// Name replayed by `:retry`. Updated only by successful loads that
    /// resolved to a non-empty name.
    pub last_location: String,
    pub weather: Option<LoadedWeather>,
    /// Bumped by every load or locate; results tagged with an older value are dropped.
    pub generation: u64,
    initial_query: LocationQuery,
}

impl AppState {
    #[must_use]
    pub fn new(settings: &RuntimeSettings) -> Self {
        Self {
            mode: AppMode::Loading,
            running: true,
            last_location: settings.default_city.clone(),
            weather: None,
            generation: 0,
            initial_query: settings.initial_query.clone(),
        }
    }

    pub fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        services: &AppServices,
        presenter: &mut dyn Presenter,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_clock_task(tx.clone());
                let query = self.initial_query.clone();
                self.start_load(query, tx, services, presenter)?;
            }
            AppEvent::TickClock => {
                presenter.tick_clock(&ClockLabel::at(&Local::now()))?;
            }
            AppEvent::Input(line) => self.handle_input(&line, tx, services, presenter)?,
            AppEvent::InputClosed => {
                self.mode = AppMode::Quit;
                self.running = false;
            }
            AppEvent::Located {
                generation,
                located,
            } => {
                if self.is_stale(generation) {
                    return Ok(());
                }
                match located {
                    Ok(coords) => self.start_load(coords.into_query(), tx, services, presenter)?,
                    Err(err) => {
                        tracing::warn!(error = %err, "geolocation failed");
                        self.fail(err.to_string(), presenter)?;
                    }
                }
            }
            AppEvent::LoadFinished {
                generation,
                query,
                outcome,
            } => {
                if self.is_stale(generation) {
                    return Ok(());
                }
                match outcome {
                    Ok(weather) => {
                        let resolved = query.resolved_name(&weather.current);
                        if !resolved.is_empty() {
                            self.last_location = resolved;
                        }
                        self.mode = AppMode::Content;
                        presenter.show_content(&weather, Utc::now())?;
                        self.weather = Some(weather);
                    }
                    Err(err) => {
                        tracing::warn!(
                            location = %query.label(),
                            kind = err.kind(),
                            error = %err,
                            "weather load failed"
                        );
                        self.fail(err.to_string(), presenter)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_input(
        &mut self,
        line: &str,
        tx: &mpsc::Sender<AppEvent>,
        services: &AppServices,
        presenter: &mut dyn Presenter,
    ) -> Result<()> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(err) => {
                presenter.show_notice(&err.to_string())?;
                return Ok(());
            }
        };

        match command {
            Command::Search(name) => {
                self.start_load(LocationQuery::by_name(name), tx, services, presenter)?;
            }
            Command::QuickCity(name) => {
                self.start_load(LocationQuery::by_name(name), tx, services, presenter)?;
            }
            Command::Coordinates { lat, lon } => {
                self.start_load(LocationQuery::by_coords(lat, lon), tx, services, presenter)?;
            }
            Command::Retry => {
                let query = LocationQuery::by_name(self.last_location.clone());
                self.start_load(query, tx, services, presenter)?;
            }
            Command::Locate => self.start_locate(tx, services, presenter)?,
            Command::Help => presenter.show_notice(HELP)?,
            Command::Quit => {
                self.mode = AppMode::Quit;
                self.running = false;
            }
        }
        Ok(())
    }

    fn start_load(
        &mut self,
        query: LocationQuery,
        tx: &mpsc::Sender<AppEvent>,
        services: &AppServices,
        presenter: &mut dyn Presenter,
    ) -> Result<()> {
        let generation = self.next_generation();
        self.mode = AppMode::Loading;
        presenter.show_loading(&query.label())?;
        tracing::debug!(location = %query.label(), generation, "load started");
        spawn_load(tx.clone(), services.weather.clone(), query, generation);
        Ok(())
    }

    fn start_locate(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        services: &AppServices,
        presenter: &mut dyn Presenter,
    ) -> Result<()> {
        let generation = self.next_generation();
        self.mode = AppMode::Loading;
        presenter.show_loading("your location")?;
        spawn_locate(tx.clone(), services.geolocation.clone(), generation);
        Ok(())
    }

    fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = generation != self.generation;
        if stale {
            tracing::debug!(generation, current = self.generation, "discarding stale result");
        }
        stale
    }

    fn fail(&mut self, message: String, presenter: &mut dyn Presenter) -> Result<()> {
        self.mode = AppMode::Error;
        presenter.show_error(&message)?;
        Ok(())
    }
}

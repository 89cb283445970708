pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::load::load_weather;
use app::settings::RuntimeSettings;
use app::state::{AppServices, AppState};
use chrono::Utc;
use cli::Cli;
use futures::StreamExt;
use tokio::sync::mpsc;
use ui::{Presenter, TextPresenter};

const GREETING: &str = "Type a city name to search, or :help for commands.";

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let settings = RuntimeSettings::from_cli(&cli);
    let services = AppServices::from_settings(&settings)?;
    let mut presenter = TextPresenter::stdout(&settings, !cli.one_shot);

    if cli.one_shot {
        return run_once(&services, &settings, &mut presenter).await;
    }
    run_interactive(&services, &settings, &mut presenter).await
}

/// Loads the initial location once and prints it.
pub async fn run_once(
    services: &AppServices,
    settings: &RuntimeSettings,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let query = &settings.initial_query;
    let weather = load_weather(&services.weather, query)
        .await
        .with_context(|| format!("weather lookup for {} failed", query.label()))?;
    presenter.show_content(&weather, Utc::now())?;
    Ok(())
}

async fn run_interactive(
    services: &AppServices,
    settings: &RuntimeSettings,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(settings);

    presenter.show_notice(GREETING)?;
    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_line = input_stream.next() => {
                let event = maybe_line.map_or(AppEvent::InputClosed, AppEvent::Input);
                app.handle_event(event, &tx, services, presenter)?;
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, services, presenter)?;
                }
            }
        }
    }

    tracing::debug!(last_location = %app.last_location, "dashboard closed");
    Ok(())
}

use std::time::Duration;

use futures::Stream;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
    time::interval,
};

use crate::{
    app::load::load_weather,
    data::{
        GeolocationError, WeatherClient, WeatherError,
        geolocation::{Coordinates, GeolocationClient},
    },
    domain::weather::{LoadedWeather, LocationQuery},
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickClock,
    Input(String),
    InputClosed,
    Located {
        generation: u64,
        located: Result<Coordinates, GeolocationError>,
    },
    LoadFinished {
        generation: u64,
        query: LocationQuery,
        outcome: Result<LoadedWeather, WeatherError>,
    },
}

/// Prompt lines from stdin. The stream ends on EOF or a read error.
pub fn spawn_input_task() -> impl Stream<Item = String> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    futures::stream::unfold(lines, |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((line, lines)),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "stdin read failed");
                None
            }
        }
    })
}

pub fn start_clock_task(tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickClock).await.is_err() {
                break;
            }
        }
    });
}

pub fn spawn_load(
    tx: mpsc::Sender<AppEvent>,
    client: WeatherClient,
    query: LocationQuery,
    generation: u64,
) {
    tokio::spawn(async move {
        let outcome = load_weather(&client, &query).await;
        let _ = tx
            .send(AppEvent::LoadFinished {
                generation,
                query,
                outcome,
            })
            .await;
    });
}

pub fn spawn_locate(tx: mpsc::Sender<AppEvent>, geolocation: GeolocationClient, generation: u64) {
    tokio::spawn(async move {
        let located = geolocation.locate().await;
        let _ = tx
            .send(AppEvent::Located {
                generation,
                located,
            })
            .await;
    });
}

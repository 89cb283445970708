use std::io::{self, Write};

use chrono::{DateTime, Utc};
use crossterm::{
    execute,
    style::{self, Stylize},
    terminal::SetTitle,
};
use ratatui::{
    buffer::{Buffer, Cell},
    style::{Color, Modifier},
};

use super::{
    ClockLabel, DashboardView, Presenter,
    widgets::{buffer_rows, render_dashboard},
};
use crate::{app::settings::RuntimeSettings, domain::weather::LoadedWeather};

const RETRY_HINT: &str = "Type :retry to try again.";

/// Line-oriented presenter. The dashboard is drawn into a ratatui buffer and
/// written out row by row, with cell colours kept when enabled.
pub struct TextPresenter<W: Write> {
    out: W,
    icon_host: String,
    color: bool,
    interactive: bool,
    title: bool,
}

impl TextPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout(settings: &RuntimeSettings, interactive: bool) -> Self {
        Self::new(io::stdout(), settings.icon_host.clone(), settings.color)
            .interactive(interactive)
            .with_title(interactive && settings.color)
    }
}

impl<W: Write> TextPresenter<W> {
    #[must_use]
    pub fn new(out: W, icon_host: impl Into<String>, color: bool) -> Self {
        Self {
            out,
            icon_host: icon_host.into(),
            color,
            interactive: false,
            title: false,
        }
    }

    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Mirror the clock into the terminal window title on every tick.
    #[must_use]
    pub fn with_title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn dashboard_text(&self, buf: &Buffer) -> String {
        let rows = if self.color {
            styled_rows(buf)
        } else {
            buffer_rows(buf)
        };
        let mut text = rows.join("\n");
        text.push('\n');
        text
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show_loading(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "Loading weather for {label}...")?;
        self.out.flush()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        let line = if self.color {
            format!("! {message}").red().to_string()
        } else {
            format!("! {message}")
        };
        writeln!(self.out, "{line}")?;
        if self.interactive {
            writeln!(self.out, "  {RETRY_HINT}")?;
        }
        self.out.flush()
    }

    fn show_content(&mut self, weather: &LoadedWeather, now: DateTime<Utc>) -> io::Result<()> {
        let view = DashboardView::build(weather, &self.icon_host, now);
        let rendered = self.dashboard_text(&render_dashboard(&view));
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()
    }

    fn show_notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    fn tick_clock(&mut self, clock: &ClockLabel) -> io::Result<()> {
        if !self.title {
            return Ok(());
        }
        execute!(
            self.out,
            SetTitle(format!("SkyVerse | {} | {}", clock.date, clock.time))
        )
    }
}

/// Rows of `buf` with runs of equally styled cells wrapped in ANSI colour codes.
fn styled_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let cells = (area.left()..area.right())
                .map(|x| &buf[(x, y)])
                .collect::<Vec<_>>();
            let end = cells
                .iter()
                .rposition(|cell| !cell.symbol().trim().is_empty())
                .map_or(0, |idx| idx + 1);
            cells[..end]
                .chunk_by(|a, b| a.fg == b.fg && a.modifier == b.modifier)
                .map(paint_run)
                .collect()
        })
        .collect()
}

fn paint_run(run: &[&Cell]) -> String {
    let text = run.iter().map(|cell| cell.symbol()).collect::<String>();
    let Some(first) = run.first() else {
        return text;
    };
    let mut styled = style::style(text);
    if let Some(color) = terminal_color(first.fg) {
        styled = styled.with(color);
    }
    if first.modifier.contains(Modifier::BOLD) {
        styled = styled.bold();
    }
    styled.to_string()
}

fn terminal_color(color: Color) -> Option<style::Color> {
    match color {
        Color::Rgb(r, g, b) => Some(style::Color::Rgb { r, g, b }),
        Color::DarkGray => Some(style::Color::DarkGrey),
        _ => None,
    }
}

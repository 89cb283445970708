use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::DashboardView;

pub const DASHBOARD_WIDTH: u16 = 72;
const HERO_ROWS: u16 = 5;
const SUN_METER_WIDTH: usize = 20;

/// Draws the dashboard into an off-screen buffer sized to its content.
#[must_use]
pub fn render_dashboard(view: &DashboardView) -> Buffer {
    let forecast_rows = u16::try_from(view.forecast.len().max(1)).unwrap_or(1);
    let hero_height = HERO_ROWS + 2;
    let forecast_height = forecast_rows + 2;
    let area = Rect::new(0, 0, DASHBOARD_WIDTH, hero_height + forecast_height);
    let mut buf = Buffer::empty(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Length(forecast_height),
        ])
        .split(area);
    render_hero(view, chunks[0], &mut buf);
    render_forecast(view, chunks[1], &mut buf);
    buf
}

fn render_hero(view: &DashboardView, area: Rect, buf: &mut Buffer) {
    let [accent, _, _, glow] = view.palette;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", view.heading()), bold.fg(accent)))
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{}°C", view.temperature), bold),
            Span::raw(format!("  feels like {}°C", view.feels_like)),
        ]),
        Line::from(format!("{} ({})", view.description, view.theme)),
        Line::from(format!(
            "Wind {}  Humidity {}  Visibility {}  Pressure {}",
            view.wind, view.humidity, view.visibility, view.pressure
        )),
        Line::from(vec![
            Span::raw(format!("Sunrise {} ", view.sunrise)),
            Span::styled(
                sun_meter(view.sun_percent, SUN_METER_WIDTH),
                Style::default().fg(glow),
            ),
            Span::raw(format!(" Sunset {}", view.sunset)),
        ]),
        Line::from(Span::styled(
            format!("Icon {}", view.icon_url),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    Paragraph::new(lines).render(inner, buf);
}

fn render_forecast(view: &DashboardView, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Forecast ")
        .border_style(Style::default().fg(view.palette[1]));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = if view.forecast.is_empty() {
        vec![Line::from(Span::styled(
            "(forecast unavailable)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        view.forecast
            .iter()
            .map(|card| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<9}", card.label),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" {:>3}° / {:>3}°  ", card.high, card.low)),
                    Span::styled(card.icon_url.clone(), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect()
    };
    Paragraph::new(lines).render(inner, buf);
}

/// Daylight elapsed between sunrise and sunset, `[████▓▒····]` style.
fn sun_meter(percent: f64, width: usize) -> String {
    let fill = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for idx in 0..width {
        let ch = if idx < fill {
            '█'
        } else if idx == fill {
            '▓'
        } else if idx == fill.saturating_add(1) {
            '▒'
        } else {
            '·'
        };
        bar.push(ch);
    }
    bar.push(']');
    bar
}

/// Buffer rows as text with trailing blanks removed.
#[must_use]
pub fn buffer_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>();
            row.trim_end().to_string()
        })
        .collect()
}

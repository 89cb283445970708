mod common;

use common::{fixed_now, london_loaded};
use skyverse::ui::{
    DashboardView, Presenter, TextPresenter,
    widgets::{buffer_rows, render_dashboard},
};

fn render(color: bool) -> String {
    let mut presenter = TextPresenter::new(Vec::new(), "https://openweathermap.org", color);
    presenter
        .show_content(&london_loaded(), fixed_now())
        .expect("render");
    String::from_utf8(presenter.into_inner()).expect("utf8")
}

#[test]
fn plain_dashboard_layout() {
    insta::assert_snapshot!(render(false).trim_end(), @r"
┌ London, United Kingdom ──────────────────────────────────────────────┐
│16°C  feels like 14°C                                                 │
│broken clouds (clouds)                                                │
│Wind 5.2 m/s  Humidity 72%  Visibility 10.0 km  Pressure 1013 hPa     │
│Sunrise 7:13 AM [██████████▓▒········] Sunset 5:10 PM                 │
│Icon https://openweathermap.org/img/wn/04d@4x.png                     │
└──────────────────────────────────────────────────────────────────────┘
┌ Forecast ────────────────────────────────────────────────────────────┐
│Today      18° /   9°  https://openweathermap.org/img/wn/10d@4x.png   │
│Tomorrow   13° /   7°  https://openweathermap.org/img/wn/04d@4x.png   │
│Sat         4° /  -2°  https://openweathermap.org/img/wn/13d@4x.png   │
└──────────────────────────────────────────────────────────────────────┘
");
}

#[test]
fn presenter_writes_the_widget_buffer_verbatim() {
    let view = DashboardView::build(&london_loaded(), "https://openweathermap.org", fixed_now());
    let mut expected = buffer_rows(&render_dashboard(&view)).join("\n");
    expected.push('\n');
    assert_eq!(render(false), expected);
}

#[test]
fn colored_dashboard_uses_condition_palette() {
    let rendered = render(true);
    // First stop of the cloud palette on the hero border.
    assert!(rendered.contains("\u{1b}[38;2;144;164;174m"));
    assert!(rendered.contains("London, United Kingdom"));
}

#[test]
fn loading_and_error_lines() {
    let mut presenter =
        TextPresenter::new(Vec::new(), "https://openweathermap.org", false).interactive(true);
    presenter.show_loading("Paris").expect("loading");
    presenter
        .show_error("HTTP Error: 500 - Internal Server Error")
        .expect("error");
    let rendered = String::from_utf8(presenter.into_inner()).expect("utf8");

    insta::assert_snapshot!(rendered.trim_end(), @r"
Loading weather for Paris...
! HTTP Error: 500 - Internal Server Error
  Type :retry to try again.
");
}

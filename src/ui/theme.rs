use ratatui::style::Color;

/// Four accent stops drawn from the current condition.
pub type ShapePalette = [Color; 4];

const CLEAR_DAY: ShapePalette = [
    Color::Rgb(79, 172, 254),
    Color::Rgb(0, 242, 254),
    Color::Rgb(135, 206, 235),
    Color::Rgb(255, 213, 79),
];
const CLEAR_NIGHT: ShapePalette = [
    Color::Rgb(26, 35, 126),
    Color::Rgb(40, 53, 147),
    Color::Rgb(57, 73, 171),
    Color::Rgb(92, 107, 192),
];
const CLOUD_DAY: ShapePalette = [
    Color::Rgb(144, 164, 174),
    Color::Rgb(176, 190, 197),
    Color::Rgb(207, 216, 220),
    Color::Rgb(236, 239, 241),
];
const SLATE_NIGHT: ShapePalette = [
    Color::Rgb(55, 71, 79),
    Color::Rgb(69, 90, 100),
    Color::Rgb(84, 110, 122),
    Color::Rgb(96, 125, 139),
];
const RAIN_DAY: ShapePalette = [
    Color::Rgb(33, 150, 243),
    Color::Rgb(66, 165, 245),
    Color::Rgb(100, 181, 246),
    Color::Rgb(144, 202, 249),
];
const RAIN_NIGHT: ShapePalette = [
    Color::Rgb(26, 35, 126),
    Color::Rgb(13, 71, 161),
    Color::Rgb(21, 101, 192),
    Color::Rgb(25, 118, 210),
];
const THUNDER: ShapePalette = [
    Color::Rgb(49, 27, 146),
    Color::Rgb(69, 39, 160),
    Color::Rgb(81, 45, 168),
    Color::Rgb(253, 216, 53),
];
const SNOW_DAY: ShapePalette = [
    Color::Rgb(227, 242, 253),
    Color::Rgb(187, 222, 251),
    Color::Rgb(144, 202, 249),
    Color::Rgb(255, 255, 255),
];
const SNOW_NIGHT: ShapePalette = [
    Color::Rgb(69, 90, 100),
    Color::Rgb(84, 110, 122),
    Color::Rgb(96, 125, 139),
    Color::Rgb(120, 144, 156),
];
const FALLBACK_DAY: ShapePalette = [
    Color::Rgb(79, 172, 254),
    Color::Rgb(102, 126, 234),
    Color::Rgb(240, 147, 251),
    Color::Rgb(255, 236, 210),
];

/// Accent palette for a raw condition category.
///
/// Only the bare `clear`, `cloud`, `rain`, `thunder` and `snow` keywords are
/// recognised here, so conditions such as overcast, drizzle or mist take the
/// fallback set even though their background tag is more specific.
#[must_use]
pub fn shape_palette(condition: &str, is_night: bool) -> ShapePalette {
    let condition = condition.to_lowercase();
    let pick = |day: ShapePalette, night: ShapePalette| if is_night { night } else { day };

    if condition.contains("clear") {
        pick(CLEAR_DAY, CLEAR_NIGHT)
    } else if condition.contains("cloud") {
        pick(CLOUD_DAY, SLATE_NIGHT)
    } else if condition.contains("rain") {
        pick(RAIN_DAY, RAIN_NIGHT)
    } else if condition.contains("thunder") {
        THUNDER
    } else if condition.contains("snow") {
        pick(SNOW_DAY, SNOW_NIGHT)
    } else {
        pick(FALLBACK_DAY, SLATE_NIGHT)
    }
}

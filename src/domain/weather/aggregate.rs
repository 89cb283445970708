use chrono::NaiveTime;

use super::{
    DailySummary, ForecastSample,
    conversions::{parse_calendar_date, parse_sample_time},
};

pub const MAX_FORECAST_DAYS: usize = 5;

/// Folds 3-hour samples into per-date summaries, in first-seen order.
///
/// A day's icon is its first sample's icon unless some sample falls exactly
/// on noon, in which case the last noon sample wins. Grouping only needs the
/// date portion; samples without a readable date are skipped.
#[must_use]
pub fn aggregate_forecast(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();
    let mut days: Vec<DailySummary> = Vec::new();

    for sample in samples {
        let Some(date) = parse_calendar_date(&sample.timestamp) else {
            continue;
        };
        let at_noon = parse_sample_time(&sample.timestamp).is_some_and(|time| time.time() == noon);

        match days.iter_mut().find(|day| day.date == date) {
            Some(day) => {
                day.temp_min_c = day.temp_min_c.min(sample.temperature_c);
                day.temp_max_c = day.temp_max_c.max(sample.temperature_c);
                if at_noon {
                    day.icon.clone_from(&sample.icon);
                }
            }
            None => days.push(DailySummary {
                date,
                temp_min_c: sample.temperature_c,
                temp_max_c: sample.temperature_c,
                icon: sample.icon.clone(),
            }),
        }
    }

    days.truncate(MAX_FORECAST_DAYS);
    days
}

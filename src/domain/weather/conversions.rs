use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

const SAMPLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `epoch + offset` as a 12-hour clock, treating the shifted instant as UTC.
#[must_use]
pub fn format_local_time(epoch_secs: i64, utc_offset_secs: i32) -> String {
    DateTime::from_timestamp(epoch_secs.saturating_add(i64::from(utc_offset_secs)), 0)
        .map_or_else(
            || "--:--".to_string(),
            |shifted| shifted.format("%-I:%M %p").to_string(),
        )
}

/// Position of the sun across the local day, 0 at sunrise and 100 at sunset.
#[must_use]
pub fn sun_position_percent(sunrise: i64, sunset: i64, utc_offset_secs: i32, now: i64) -> f64 {
    let offset = i64::from(utc_offset_secs);
    let local_now = now.saturating_add(offset);
    let local_sunrise = sunrise.saturating_add(offset);
    let local_sunset = sunset.saturating_add(offset);

    if local_now < local_sunrise {
        return 0.0;
    }
    if local_now > local_sunset {
        return 100.0;
    }

    let day_length = local_sunset.saturating_sub(local_sunrise);
    if day_length <= 0 {
        return 100.0;
    }
    let elapsed = local_now.saturating_sub(local_sunrise);
    (elapsed as f64 / day_length as f64 * 100.0).clamp(0.0, 100.0)
}

#[must_use]
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today.succ_opt() == Some(date) {
        return "Tomorrow".to_string();
    }
    date.format("%a").to_string()
}

/// Calendar date of `now` at a location `utc_offset_secs` away from UTC.
#[must_use]
pub fn local_date(now: DateTime<Utc>, utc_offset_secs: i32) -> NaiveDate {
    (now + Duration::seconds(i64::from(utc_offset_secs))).date_naive()
}

/// Date portion of `"YYYY-MM-DD"` or `"YYYY-MM-DD HH:MM:SS"`.
#[must_use]
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split([' ', 'T']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[must_use]
pub fn parse_sample_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, SAMPLE_TIME_FORMAT).ok()
}

#[must_use]
pub fn round_temp(value: f64) -> i64 {
    value.round() as i64
}

#[must_use]
pub fn visibility_km(metres: u32) -> f64 {
    f64::from(metres) / 1000.0
}

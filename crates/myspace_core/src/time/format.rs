//! Human-readable timestamp rendering.

use super::reference_zone;
use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const RELATIVE_AGE_MAX_DAYS: i64 = 7;

/// Renders elapsed time since `timestamp` as used on note cards.
///
/// - under a minute (or in the future): `just now`
/// - under an hour / a day / a week: `N minute(s)|hour(s)|day(s) ago`
/// - otherwise: `Mon D, YYYY` in the reference zone
pub fn format_relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).num_seconds();
    if elapsed < SECONDS_PER_MINUTE {
        return "just now".to_string();
    }
    if elapsed < SECONDS_PER_HOUR {
        return ago(elapsed / SECONDS_PER_MINUTE, "minute");
    }
    if elapsed < SECONDS_PER_DAY {
        return ago(elapsed / SECONDS_PER_HOUR, "hour");
    }
    if elapsed < RELATIVE_AGE_MAX_DAYS * SECONDS_PER_DAY {
        return ago(elapsed / SECONDS_PER_DAY, "day");
    }

    timestamp
        .with_timezone(&reference_zone())
        .format("%b %-d, %Y")
        .to_string()
}

/// Renders a log entry time banded by calendar day in the reference zone.
///
/// Same day is `Today, HH:MM`, the previous day `Yesterday, HH:MM`, the rest
/// of the past week `<Weekday>, HH:MM`; anything older or future-dated gets
/// `Mon D, YYYY, HH:MM`.
pub fn format_log_timestamp(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let zone = reference_zone();
    let local = timestamp.with_timezone(&zone);
    let today = now.with_timezone(&zone).date_naive();
    let days_ago = (today - local.date_naive()).num_days();
    let clock = local.format("%H:%M");

    match days_ago {
        0 => format!("Today, {clock}"),
        1 => format!("Yesterday, {clock}"),
        2..=6 => format!("{}, {clock}", local.format("%A")),
        _ => local.format("%b %-d, %Y, %H:%M").to_string(),
    }
}

/// Date/time widget readout in the reference zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// `HH:MM:SS`, 24-hour.
    pub time: String,
    /// `Weekday, Month D, YYYY`.
    pub date: String,
}

impl ClockReading {
    pub fn at(now: DateTime<Utc>) -> Self {
        let local = now.with_timezone(&reference_zone());
        Self {
            time: local.format("%H:%M:%S").to_string(),
            date: local.format("%A, %B %-d, %Y").to_string(),
        }
    }
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

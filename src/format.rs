//! Date and time strings for event cards. Everything is computed in UTC so a
//! bare date never shifts to the previous day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::CalendarEvent;

static BARE_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("regex compiles"));

const EVENT_COLORS: [&str; 6] = ["pink", "blue", "green", "yellow", "purple", "orange"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBadge {
    pub day: u32,
    pub month: String,
}

pub fn parse_event_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if BARE_DATE.is_match(value) {
        return NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Day of month and upper-case short month, e.g. `4` / `AUG`.
pub fn badge(value: &str) -> Option<DateBadge> {
    let date = parse_event_date(value)?;
    Some(DateBadge {
        day: date.day(),
        month: date.format("%b").to_string().to_uppercase(),
    })
}

/// Long form such as `Monday, August 4, 2025`.
pub fn full_date(value: &str) -> Option<String> {
    parse_event_date(value).map(|date| date.format("%A, %B %-d, %Y").to_string())
}

fn full_date_or_raw(value: &str) -> String {
    full_date(value).unwrap_or_else(|| value.to_string())
}

pub fn event_time_phrase(event: &CalendarEvent) -> String {
    if event.is_all_day {
        return "All Day Event".to_string();
    }

    let start_time = event.start_time.as_deref().unwrap_or("TBD");
    let end_time = event.end_time.as_deref().unwrap_or("TBD");
    let start = full_date_or_raw(&event.start_date);

    if event.end_date.is_empty() || event.end_date == event.start_date {
        format!("{start} from {start_time} to {end_time}")
    } else {
        let end = full_date_or_raw(&event.end_date);
        format!("{start} at {start_time} to {end} at {end_time}")
    }
}

pub fn event_color(index: usize) -> &'static str {
    EVENT_COLORS[index % EVENT_COLORS.len()]
}

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, Event, EventLike};

use crate::content::SCHOOL_NAME;
use crate::format::parse_event_date;
use crate::models::CalendarEvent;

const TIME_FORMATS: [&str; 4] = ["%I:%M %p", "%l:%M %p", "%I:%M%p", "%H:%M"];

#[derive(Clone)]
pub struct ICalExporter {
    tz: Tz,
}

impl ICalExporter {
    /// Wall-clock event times are interpreted in `tz`.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn generate(&self, events: &[CalendarEvent]) -> Vec<u8> {
        if events.is_empty() {
            return Vec::new();
        }

        let mut calendar = Calendar::new();
        calendar.name(&format!("{SCHOOL_NAME} School Calendar"));

        for item in events {
            let Some(start_date) = parse_event_date(&item.start_date).map(|dt| dt.date_naive())
            else {
                tracing::debug!(id = %item.id, date = %item.start_date, "skipping event with unparseable date");
                continue;
            };
            let end_date = parse_event_date(&item.end_date)
                .map(|dt| dt.date_naive())
                .filter(|end| *end >= start_date)
                .unwrap_or(start_date);

            let mut event = Event::new();
            event.summary(&item.title);

            let timed = if item.is_all_day {
                None
            } else {
                self.instant(start_date, item.start_time.as_deref())
                    .map(|start| {
                        let end = self
                            .instant(end_date, item.end_time.as_deref())
                            .filter(|end| *end > start)
                            .unwrap_or(start + Duration::hours(1));
                        (start, end)
                    })
            };
            match timed {
                Some((start, end)) => {
                    event.starts(start);
                    event.ends(end);
                }
                None => {
                    event.starts(start_date);
                    event.ends(end_date + Duration::days(1));
                }
            }

            if let Some(description) = &item.description {
                event.description(description);
            }
            if let Some(location) = &item.location {
                event.location(location);
            }
            if let Some(category) = &item.category {
                event.add_property("CATEGORIES", category);
            }
            event.uid(&format!("{}-{}-pacifico-calendar", start_date.format("%Y%m%d"), item.id));
            calendar.push(event);
        }

        calendar.to_string().into_bytes()
    }

    fn instant(&self, date: NaiveDate, time: Option<&str>) -> Option<DateTime<Utc>> {
        let time = parse_wall_clock(time?)?;
        self.tz
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

fn parse_wall_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim().to_uppercase();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&value, fmt).ok())
}

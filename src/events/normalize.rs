use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::CalendarEvent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("No array found in events response")]
    NoArray,
    #[error("No events found after normalization")]
    Empty,
}

/// Keys checked, in order, before falling back to the first array member.
const ARRAY_KEYS: [&str; 4] = ["events", "data", "results", "items"];

/// Locates the list of raw event records inside an upstream payload.
pub fn extract_records(payload: Value) -> Result<Vec<Value>, NormalizeError> {
    let mut object = match payload {
        Value::Array(records) => return Ok(records),
        Value::Object(object) => object,
        _ => return Err(NormalizeError::NoArray),
    };

    for key in ARRAY_KEYS {
        if matches!(object.get(key), Some(Value::Array(_)))
            && let Some(Value::Array(records)) = object.remove(key)
        {
            return Ok(records);
        }
    }

    tracing::warn!("events payload has an unexpected shape, scanning for an array");
    object
        .into_iter()
        .find_map(|(_, value)| match value {
            Value::Array(records) => Some(records),
            _ => None,
        })
        .ok_or(NormalizeError::NoArray)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Id,
    Title,
    Description,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    AllDay,
    Category,
    Location,
}

/// Logical event field -> ordered list of upstream keys that may carry it.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    rules: Vec<(EventField, Vec<&'static str>)>,
}

impl Default for FieldMapping {
    fn default() -> Self {
        use EventField::*;

        Self {
            rules: vec![
                (Id, vec!["id", "_id", "uuid"]),
                (
                    Title,
                    vec!["title", "name", "summary", "event_name", "subject"],
                ),
                (
                    Description,
                    vec!["description", "details", "summary", "notes", "body"],
                ),
                (
                    StartDate,
                    vec!["start_date", "startDate", "date", "event_date", "start"],
                ),
                (
                    EndDate,
                    vec![
                        "end_date",
                        "endDate",
                        "date",
                        "event_date",
                        "end",
                        "start_date",
                        "startDate",
                    ],
                ),
                (StartTime, vec!["start_time", "startTime", "time_start"]),
                (EndTime, vec!["end_time", "endTime", "time_end"]),
                (AllDay, vec!["isAllDay", "all_day", "allDay"]),
                (Category, vec!["category", "type", "group"]),
                (Location, vec!["location", "venue", "place", "address"]),
            ],
        }
    }
}

impl FieldMapping {
    pub fn candidates(&self, field: EventField) -> &[&'static str] {
        self.rules
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, keys)| keys.as_slice())
            .unwrap_or(&[])
    }

    /// Appends an extra upstream key for `field`, checked after the existing ones.
    pub fn with_candidate(mut self, field: EventField, key: &'static str) -> Self {
        match self.rules.iter_mut().find(|(f, _)| *f == field) {
            Some((_, keys)) => keys.push(key),
            None => self.rules.push((field, vec![key])),
        }
        self
    }

    /// First candidate holding a non-empty string or a non-zero number.
    pub fn resolve_text(&self, record: &Map<String, Value>, field: EventField) -> Option<String> {
        self.candidates(field)
            .iter()
            .filter_map(|key| record.get(*key))
            .find_map(text_value)
    }

    pub fn resolve_flag(&self, record: &Map<String, Value>, field: EventField) -> bool {
        self.candidates(field)
            .iter()
            .filter_map(|key| record.get(*key))
            .any(truthy)
    }

    pub fn normalize(
        &self,
        record: &Map<String, Value>,
        index: usize,
        today: NaiveDate,
    ) -> CalendarEvent {
        use EventField::*;

        let is_all_day = self.resolve_flag(record, AllDay);
        let start_date = self
            .resolve_text(record, StartDate)
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
        let end_date = self
            .resolve_text(record, EndDate)
            .unwrap_or_else(|| start_date.clone());
        let (start_time, end_time) = if is_all_day {
            (None, None)
        } else {
            (
                self.resolve_text(record, StartTime),
                self.resolve_text(record, EndTime),
            )
        };

        CalendarEvent {
            id: self
                .resolve_text(record, Id)
                .unwrap_or_else(|| format!("api-event-{index}")),
            title: self
                .resolve_text(record, Title)
                .unwrap_or_else(|| "Event".to_string()),
            description: self.resolve_text(record, Description),
            start_date,
            end_date,
            start_time,
            end_time,
            is_all_day,
            category: self.resolve_text(record, Category),
            location: self.resolve_text(record, Location),
        }
    }

    /// Maps raw records to events, keeping at most `limit` in upstream order.
    /// Records that are not JSON objects are skipped.
    pub fn normalize_all(
        &self,
        records: &[Value],
        limit: usize,
        today: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, NormalizeError> {
        let events: Vec<CalendarEvent> = records
            .iter()
            .filter_map(Value::as_object)
            .take(limit)
            .enumerate()
            .map(|(index, record)| self.normalize(record, index, today))
            .collect();

        if events.is_empty() {
            return Err(NormalizeError::Empty);
        }
        Ok(events)
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => s.eq_ignore_ascii_case("true") || s == "1",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    fn sample_records() -> Value {
        json!([
            {"id": "a", "title": "Harvest Festival", "date": "2025-09-20", "all_day": true},
            {"id": "b", "name": "Parent Meeting", "start_date": "2025-08-18", "start_time": "3:00 PM", "end_time": "4:30 PM"}
        ])
    }

    #[test]
    fn test_extract_records_is_shape_invariant() {
        let expected = sample_records().as_array().unwrap().clone();
        for key in ["events", "data", "results", "items"] {
            let payload = json!({ key: sample_records() });
            assert_eq!(extract_records(payload).unwrap(), expected, "key {key}");
        }
        assert_eq!(extract_records(sample_records()).unwrap(), expected);
    }

    #[test]
    fn test_extract_records_prefers_conventional_keys() {
        let payload = json!({"other": [1], "items": [2], "data": [3]});
        assert_eq!(extract_records(payload).unwrap(), vec![json!(3)]);
    }

    #[test]
    fn test_extract_records_scans_for_first_array() {
        let payload = json!({"status": "ok", "count": 1, "upcoming": [{"title": "x"}], "later": []});
        assert_eq!(
            extract_records(payload).unwrap(),
            vec![json!({"title": "x"})]
        );
    }

    #[test]
    fn test_extract_records_skips_non_array_conventional_key() {
        let payload = json!({"events": {"count": 0}, "list": [1]});
        assert_eq!(extract_records(payload).unwrap(), vec![json!(1)]);
    }

    #[test]
    fn test_extract_records_without_array_fails() {
        assert_eq!(
            extract_records(json!({"status": "ok"})),
            Err(NormalizeError::NoArray)
        );
        assert_eq!(extract_records(json!("nope")), Err(NormalizeError::NoArray));
    }

    #[test]
    fn test_normalize_uses_candidate_priority() {
        let mapping = FieldMapping::default();
        let record = json!({
            "_id": 42,
            "summary": "Summary title",
            "subject": "Subject title",
            "event_date": "2025-08-20",
            "venue": "Main hall",
            "type": "Community"
        });
        let event = mapping.normalize(record.as_object().unwrap(), 0, today());
        assert_eq!(event.id, "42");
        assert_eq!(event.title, "Summary title");
        assert_eq!(event.description.as_deref(), Some("Summary title"));
        assert_eq!(event.start_date, "2025-08-20");
        assert_eq!(event.end_date, "2025-08-20");
        assert_eq!(event.location.as_deref(), Some("Main hall"));
        assert_eq!(event.category.as_deref(), Some("Community"));
    }

    #[test]
    fn test_normalize_defaults() {
        let mapping = FieldMapping::default();
        let record = json!({"title": ""});
        let event = mapping.normalize(record.as_object().unwrap(), 3, today());
        assert_eq!(event.id, "api-event-3");
        assert_eq!(event.title, "Event");
        assert_eq!(event.start_date, "2025-08-01");
        assert_eq!(event.end_date, "2025-08-01");
        assert!(!event.is_all_day);
        assert!(event.description.is_none());
    }

    #[test]
    fn test_all_day_drops_times() {
        let mapping = FieldMapping::default();
        for flag in ["isAllDay", "all_day", "allDay"] {
            let record = json!({
                "title": "Holiday",
                "startDate": "2025-09-15",
                "startTime": "8:00 AM",
                flag: true
            });
            let event = mapping.normalize(record.as_object().unwrap(), 0, today());
            assert!(event.is_all_day, "flag {flag}");
            assert!(event.start_time.is_none());
            assert!(event.end_time.is_none());
        }
    }

    #[test]
    fn test_timed_event_keeps_times() {
        let mapping = FieldMapping::default();
        let record = json!({"startDate": "2025-09-15", "time_start": "8:00 AM", "endTime": "9:00 AM", "allDay": false});
        let event = mapping.normalize(record.as_object().unwrap(), 0, today());
        assert!(!event.is_all_day);
        assert_eq!(event.start_time.as_deref(), Some("8:00 AM"));
        assert_eq!(event.end_time.as_deref(), Some("9:00 AM"));
    }

    #[test]
    fn test_normalize_all_truncates_in_order() {
        let mapping = FieldMapping::default();
        let records: Vec<Value> = (0..9).map(|i| json!({"title": format!("E{i}")})).collect();
        let events = mapping.normalize_all(&records, 6, today()).unwrap();
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["E0", "E1", "E2", "E3", "E4", "E5"]);
    }

    #[test]
    fn test_normalize_all_never_pads() {
        let mapping = FieldMapping::default();
        let records = vec![json!({"title": "Only"}), json!({"title": "Two"})];
        assert_eq!(mapping.normalize_all(&records, 6, today()).unwrap().len(), 2);
    }

    #[test]
    fn test_normalize_all_empty_fails() {
        let mapping = FieldMapping::default();
        assert_eq!(
            mapping.normalize_all(&[json!(1), json!("x")], 6, today()),
            Err(NormalizeError::Empty)
        );
    }

    #[test]
    fn test_mapping_is_extensible() {
        let mapping = FieldMapping::default().with_candidate(EventField::Title, "headline");
        let record = json!({"headline": "Spring Fair"});
        let event = mapping.normalize(record.as_object().unwrap(), 0, today());
        assert_eq!(event.title, "Spring Fair");
        assert_eq!(mapping.candidates(EventField::Title).last(), Some(&"headline"));
    }
}

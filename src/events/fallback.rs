use crate::models::CalendarEvent;

/// Hand-maintained events shown when the calendar API cannot be used.
pub fn fallback_events() -> Vec<CalendarEvent> {
    vec![
        timed(
            "1",
            "Grades 1&2 Meet your Teacher",
            "Parent(s) please come with your 1st and 2nd graders to meet your teacher.",
            "2024-08-18",
            ("10:00 AM", "12:00 PM"),
            "Grades 1 & 2",
        ),
        timed(
            "2",
            "All Parent Meeting",
            "At least one parent from each family must attend the first informational meeting.",
            "2024-08-18",
            ("3:00 PM", "4:30 PM"),
            "All Parents",
        ),
        all_day(
            "3",
            "First Day Grades!",
            "First day of school.",
            "2024-08-19",
            "Grades 1 & 2",
        ),
        timed(
            "4",
            "Kindergarten Meet your Teacher",
            "Parent(s) please come with your kindergartener to meet your teacher.",
            "2024-08-19",
            ("10:00 AM", "12:00 PM"),
            "Kindergarten",
        ),
        all_day(
            "5",
            "First Day Kindergarten!",
            "First day of school.",
            "2024-08-20",
            "Kindergarten",
        ),
        all_day(
            "6",
            "Costa Rica Independence Day",
            "No school - National Holiday.",
            "2024-09-15",
            "All Students",
        ),
    ]
}

fn timed(
    id: &str,
    title: &str,
    description: &str,
    date: &str,
    (start, end): (&str, &str),
    category: &str,
) -> CalendarEvent {
    CalendarEvent {
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
        is_all_day: false,
        ..all_day(id, title, description, date, category)
    }
}

fn all_day(id: &str, title: &str, description: &str, date: &str, category: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        start_date: date.to_string(),
        end_date: date.to_string(),
        start_time: None,
        end_time: None,
        is_all_day: true,
        category: Some(category.to_string()),
        location: None,
    }
}

use crate::components::availability::SessionRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Suffix appended to titles of sessions that already started
pub const PAST_SUFFIX: &str = " (past)";

/// Color used for session types missing from the mapping
pub const FALLBACK_COLOR: &str = "gray";

/// Display-ready calendar event derived from one session record
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub color: String,
    /// Session start, normalized to UTC, RFC 3339
    pub start: String,
    /// Session end, normalized to UTC, RFC 3339
    pub end: String,
    pub extended_props: ExtendedProps,
}

/// Extra data carried alongside the event for consumers of the raw count
#[derive(Debug, Clone, Serialize)]
pub struct ExtendedProps {
    pub last_availability: Option<i64>,
}

/// Build one calendar event from a session record.
///
/// `now` is passed in explicitly so the past-marker decision is
/// deterministic and testable.
pub fn to_calendar_event(
    record: &SessionRecord,
    now: DateTime<Utc>,
    colors: &HashMap<String, String>,
) -> CalendarEvent {
    let color = colors
        .get(&record.session_type)
        .cloned()
        .unwrap_or_else(|| FALLBACK_COLOR.to_string());

    let availability = match record.last_availability {
        Some(count) => count.to_string(),
        None => "-".to_string(),
    };

    let start_utc = record.start_time.with_timezone(&Utc);
    let end_utc = record.end_time.with_timezone(&Utc);

    let mut title = format!("{} | Availability: {}", record.session_type, availability);
    if start_utc < now {
        title.push_str(PAST_SUFFIX);
    }

    CalendarEvent {
        title,
        color,
        start: start_utc.to_rfc3339(),
        end: end_utc.to_rfc3339(),
        extended_props: ExtendedProps {
            last_availability: record.last_availability,
        },
    }
}

/// Build calendar events for a batch of records, in source order
pub fn to_calendar_events(
    records: &[SessionRecord],
    now: DateTime<Utc>,
    colors: &HashMap<String, String>,
) -> Vec<CalendarEvent> {
    records
        .iter()
        .map(|record| to_calendar_event(record, now, colors))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_session_colors;
    use chrono::TimeZone;

    fn record(session_type: &str, start: &str, end: &str, availability: Option<i64>) -> SessionRecord {
        SessionRecord {
            id: None,
            session_type: session_type.to_string(),
            start_time: DateTime::parse_from_rfc3339(start).unwrap(),
            end_time: DateTime::parse_from_rfc3339(end).unwrap(),
            last_availability: availability,
        }
    }

    #[test]
    fn test_unknown_session_type_gets_gray() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let record = record(
            "Secret Pro Invitational",
            "2025-03-02T18:00:00+01:00",
            "2025-03-02T19:00:00+01:00",
            Some(4),
        );

        let event = to_calendar_event(&record, now, &default_session_colors());
        assert_eq!(event.color, "gray");
    }

    #[test]
    fn test_known_session_type_gets_mapped_color() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let record = record(
            "Intermediate Surf Session",
            "2025-03-02T18:00:00+01:00",
            "2025-03-02T19:00:00+01:00",
            Some(4),
        );

        let event = to_calendar_event(&record, now, &default_session_colors());
        assert_eq!(event.color, "blue");
    }

    #[test]
    fn test_past_marker() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let colors = default_session_colors();

        // Started before now (11:00 UTC)
        let past = record(
            "Surfnight",
            "2025-03-01T12:00:00+01:00",
            "2025-03-01T13:00:00+01:00",
            Some(2),
        );
        let event = to_calendar_event(&past, now, &colors);
        assert!(event.title.ends_with(PAST_SUFFIX));

        // Starts after now
        let upcoming = record(
            "Surfnight",
            "2025-03-01T20:00:00+01:00",
            "2025-03-01T21:00:00+01:00",
            Some(2),
        );
        let event = to_calendar_event(&upcoming, now, &colors);
        assert!(!event.title.ends_with(PAST_SUFFIX));

        // Starts exactly at now: the comparison is strict, no marker
        let boundary = record(
            "Surfnight",
            "2025-03-01T13:00:00+01:00",
            "2025-03-01T14:00:00+01:00",
            Some(2),
        );
        let event = to_calendar_event(&boundary, now, &colors);
        assert!(!event.title.ends_with(PAST_SUFFIX));
    }

    #[test]
    fn test_title_format_and_timestamps_normalized_to_utc() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let record = record(
            "Surfnight",
            "2025-03-01T20:00:00+01:00",
            "2025-03-01T22:00:00+01:00",
            Some(12),
        );

        let event = to_calendar_event(&record, now, &default_session_colors());
        assert_eq!(event.title, "Surfnight | Availability: 12");
        assert_eq!(event.start, "2025-03-01T19:00:00+00:00");
        assert_eq!(event.end, "2025-03-01T21:00:00+00:00");
        assert_eq!(event.extended_props.last_availability, Some(12));
    }

    #[test]
    fn test_missing_availability_renders_placeholder() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let record = record(
            "Surfnight",
            "2025-03-01T20:00:00+01:00",
            "2025-03-01T22:00:00+01:00",
            None,
        );

        let event = to_calendar_event(&record, now, &default_session_colors());
        assert_eq!(event.title, "Surfnight | Availability: -");
        assert_eq!(event.extended_props.last_availability, None);
    }

    #[test]
    fn test_batch_keeps_source_order() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let records = vec![
            record(
                "Surfnight",
                "2025-03-02T20:00:00+01:00",
                "2025-03-02T22:00:00+01:00",
                Some(1),
            ),
            record(
                "Intermediate Surf Session",
                "2025-03-02T10:00:00+01:00",
                "2025-03-02T11:00:00+01:00",
                Some(2),
            ),
        ];

        let events = to_calendar_events(&records, now, &default_session_colors());
        assert_eq!(events.len(), 2);
        assert!(events[0].title.starts_with("Surfnight"));
        assert!(events[1].title.starts_with("Intermediate Surf Session"));
    }
}

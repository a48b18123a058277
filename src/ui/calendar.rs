//! Weekly calendar rendering for the interactive dashboard.

use crate::calendar::{CalendarEvent, WeekWindow};
use ansi_term::Colour;
use chrono::{DateTime, Duration, NaiveDate};
use chrono_tz::Tz;

/// Map an event color name onto a terminal colour
fn terminal_colour(color: &str) -> Colour {
    match color {
        "green" => Colour::Green,
        "blue" => Colour::Blue,
        "red" => Colour::Red,
        "purple" => Colour::Purple,
        "yellow" => Colour::Yellow,
        "cyan" => Colour::Cyan,
        // "gray" and anything unmapped
        _ => Colour::Fixed(244),
    }
}

/// Render the weekly view for `window`, one section per day, times in `tz`
pub fn render_week(
    window: &WeekWindow,
    events: &[CalendarEvent],
    tz: &Tz,
    today: NaiveDate,
) -> String {
    let mut out = String::new();

    let marker = if window.is_current(today) {
        " (current week)"
    } else {
        ""
    };
    out.push_str(&format!(
        "Week {} - {}{}\n",
        window.start_date.format("%Y-%m-%d"),
        (window.end_date - Duration::days(1)).format("%Y-%m-%d"),
        marker
    ));

    for day in window.days() {
        out.push_str(&format!("\n{}\n", day.format("%A, %B %d")));

        let mut has_events = false;
        for event in events {
            let (start, end) = match event_times(event, tz) {
                Some(times) => times,
                None => continue,
            };
            if start.date_naive() != day {
                continue;
            }
            has_events = true;

            let line = format!(
                "  {}-{}  {}",
                start.format("%H:%M"),
                end.format("%H:%M"),
                event.title
            );
            out.push_str(&format!("{}\n", terminal_colour(&event.color).paint(line)));
        }

        if !has_events {
            out.push_str("  no sessions\n");
        }
    }

    out
}

/// Parse the event's RFC 3339 timestamps into the display timezone
fn event_times(event: &CalendarEvent, tz: &Tz) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    let start = DateTime::parse_from_rfc3339(&event.start).ok()?;
    let end = DateTime::parse_from_rfc3339(&event.end).ok()?;
    Some((start.with_timezone(tz), end.with_timezone(tz)))
}

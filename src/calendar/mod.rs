pub mod events;
pub mod week;

pub use events::{to_calendar_event, to_calendar_events, CalendarEvent};
pub use week::WeekWindow;

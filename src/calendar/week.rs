use chrono::{Datelike, Duration, NaiveDate};

/// How many weeks before the current week the window may be moved
pub const MAX_WEEKS_BACK: i64 = 3;
/// How many weeks past the current week the window may be moved
pub const MAX_WEEKS_FORWARD: i64 = 1;

/// The 7-day date range currently displayed.
///
/// Transitions are pure functions returning a new window; `today` is passed
/// in so the clamping bounds do not depend on ambient time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Monday of the week containing `date`
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

impl WeekWindow {
    /// Window for the week containing `today`
    pub fn current(today: NaiveDate) -> Self {
        Self::starting_at(monday_of_week(today))
    }

    // All windows are built here, which keeps end_date = start_date + 7 days
    fn starting_at(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: start_date + Duration::days(7),
        }
    }

    /// Shift one week back, clamped at MAX_WEEKS_BACK weeks before the
    /// current week's Monday
    pub fn previous(self, today: NaiveDate) -> Self {
        let earliest = monday_of_week(today) - Duration::weeks(MAX_WEEKS_BACK);
        let start = (self.start_date - Duration::weeks(1)).max(earliest);
        Self::starting_at(start)
    }

    /// Shift one week forward, clamped at MAX_WEEKS_FORWARD weeks past the
    /// current week's Monday
    pub fn next(self, today: NaiveDate) -> Self {
        let latest = monday_of_week(today) + Duration::weeks(MAX_WEEKS_FORWARD);
        let start = (self.start_date + Duration::weeks(1)).min(latest);
        Self::starting_at(start)
    }

    /// True while `previous` can still move the window
    pub fn can_go_previous(&self, today: NaiveDate) -> bool {
        self.start_date > monday_of_week(today) - Duration::weeks(MAX_WEEKS_BACK)
    }

    /// True while `next` can still move the window
    pub fn can_go_next(&self, today: NaiveDate) -> bool {
        self.start_date < monday_of_week(today) + Duration::weeks(MAX_WEEKS_FORWARD)
    }

    /// True when the window shows the week containing `today`
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.start_date == monday_of_week(today)
    }

    /// The seven dates of the window, Monday first
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7).map(move |offset| self.start_date + Duration::days(offset))
    }
}

//! Timezone-naive calendar instant value object

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A timezone-naive point on the calendar
///
/// Wraps a [`NaiveDateTime`]: year/month/day plus an incidental time-of-day
/// (midnight for every date-only input pattern). Immutable after
/// construction. The derived ordering is the lexicographic
/// (year, month, day, hour, minute, second) order, so sorting a list of
/// instants sorts it chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CalendarInstant(NaiveDateTime);

impl CalendarInstant {
    /// Create an instant at midnight of the given date
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    /// Create an instant from calendar fields, if they denote a real date
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_date)
    }

    /// The underlying naive date-time
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Calendar year
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month (1-12)
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month (1-31)
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for CalendarInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NaiveDate> for CalendarInstant {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

use crate::calendar_intervals::CalendarInterval;
use crate::calendar_months::CalendarMonth;
use crate::errors::{Error, Result};
use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Weekday,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A day in the calendar, with no time of day and no time zone.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or(Error::InvalidDate { year, month, day })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    /// Parse a date with a chrono format string, e.g. "%d/%m/%Y"
    pub fn parse(text: &str, format: &str) -> Result<Self> {
        Ok(CalendarDate(NaiveDate::parse_from_str(text, format)?))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn day_of_week(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn as_calendar_month(&self) -> CalendarMonth {
        CalendarMonth::from(*self)
    }

    /// None past the last representable date
    pub fn next_day(&self) -> Option<Self> {
        self.0.succ_opt().map(CalendarDate)
    }

    pub fn previous_day(&self) -> Option<Self> {
        self.0.pred_opt().map(CalendarDate)
    }

    pub fn plus_days(&self, count: i64) -> Option<Self> {
        let days = Days::new(count.unsigned_abs());
        if count >= 0 {
            self.0.checked_add_days(days)
        } else {
            self.0.checked_sub_days(days)
        }
        .map(CalendarDate)
    }

    /// Moves by whole months.  The day is clamped to the end of the target
    /// month, so 2011-01-31 plus one month is 2011-02-28.
    pub fn plus_months(&self, count: i32) -> Option<Self> {
        let months = Months::new(count.unsigned_abs());
        if count >= 0 {
            self.0.checked_add_months(months)
        } else {
            self.0.checked_sub_months(months)
        }
        .map(CalendarDate)
    }

    /// Number of days from self to other, negative if other is earlier
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    pub fn is_before(&self, other: &CalendarDate) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &CalendarDate) -> bool {
        self > other
    }

    /// The interval `[self, end]`
    pub fn through(&self, end: CalendarDate) -> Result<CalendarInterval> {
        CalendarInterval::from_dates(*self, end)
    }

    /// Midnight at the start of this day in the given time zone, or None if
    /// that local time was skipped (a DST change at midnight).  When midnight
    /// happens twice, the earliest is returned.
    pub fn start_as_time_point(&self, zone: Tz) -> Option<DateTime<Tz>> {
        let midnight = self.0.and_hms_opt(0, 0, 0)?;
        zone.from_local_datetime(&midnight).earliest()
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parse an ISO date like "2011-04-15"
    fn from_str(s: &str) -> Result<Self> {
        CalendarDate::parse(s, "%Y-%m-%d")
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

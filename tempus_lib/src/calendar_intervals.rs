use crate::calendar_dates::CalendarDate;
use crate::calendar_months::CalendarMonth;
use crate::errors::{Error, Result};
use serde::Serialize;
use tempus_intervals::{Interval, LimitValue};

/// A closed range of days `[start, end]`.  Either end may be unbounded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CalendarInterval(Interval<CalendarDate>);

impl CalendarInterval {
    /// The days from start to end, both included.
    pub fn inclusive(
        start: LimitValue<CalendarDate>,
        end: LimitValue<CalendarDate>,
    ) -> Result<Self> {
        Ok(CalendarInterval(Interval::over(start, true, end, true)?))
    }

    pub fn from_dates(start: CalendarDate, end: CalendarDate) -> Result<Self> {
        Ok(CalendarInterval(Interval::closed(start, end)?))
    }

    /// All the days since start
    pub fn starting_from(start: CalendarDate) -> Self {
        CalendarInterval(Interval::at_least(start))
    }

    /// All the days up to end
    pub fn ending_at(end: CalendarDate) -> Self {
        CalendarInterval(Interval::at_most(end))
    }

    pub fn everything() -> Self {
        CalendarInterval(Interval::all())
    }

    /// All the days of a month
    pub fn month(month: CalendarMonth) -> Result<Self> {
        Self::from_dates(month.first_day(), month.last_day())
    }

    /// All the days of a year
    pub fn year(year: i32) -> Result<Self> {
        Self::from_dates(
            CalendarDate::from_ymd(year, 1, 1)?,
            CalendarDate::from_ymd(year, 12, 31)?,
        )
    }

    pub fn start(&self) -> &LimitValue<CalendarDate> {
        self.0.lower()
    }

    pub fn end(&self) -> &LimitValue<CalendarDate> {
        self.0.upper()
    }

    pub fn includes(&self, date: &LimitValue<CalendarDate>) -> bool {
        self.0.includes(date)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.0.contains(date)
    }

    /// The month of the first day, None when unbounded
    pub fn start_month(&self) -> Option<CalendarMonth> {
        self.start().value().copied().map(CalendarMonth::from)
    }

    /// The month of the last day, None when unbounded
    pub fn end_month(&self) -> Option<CalendarMonth> {
        self.end().value().copied().map(CalendarMonth::from)
    }

    /// Number of days in the interval, None when unbounded
    pub fn length_in_days(&self) -> Option<i64> {
        Some(self.start().value()?.days_until(self.end().value()?) + 1)
    }

    /// Number of months touched by the interval, counting partial months.
    /// None when unbounded.
    pub fn length_in_months(&self) -> Option<i32> {
        Some(self.start_month()?.months_until(&self.end_month()?) + 1)
    }

    /// Each day of the interval in order.  Endless if the interval has no
    /// end (until the last representable date).
    pub fn days(&self) -> Result<impl Iterator<Item = CalendarDate>> {
        let start = self.start().value().copied().ok_or(Error::UnboundedStart)?;
        let end = *self.0.upper_limit();
        Ok(std::iter::successors(Some(start), CalendarDate::next_day)
            .take_while(move |d| end.admits(d)))
    }

    /// Each month touched by the interval, in order.
    pub fn months(&self) -> Result<impl Iterator<Item = CalendarMonth>> {
        let start = self.start_month().ok_or(Error::UnboundedStart)?;
        let end = self.end_month();
        Ok(std::iter::successors(Some(start), CalendarMonth::next_month)
            .take_while(move |m| end.map_or(true, |e| *m <= e)))
    }

    pub fn as_interval(&self) -> &Interval<CalendarDate> {
        &self.0
    }
}

impl From<CalendarInterval> for Interval<CalendarDate> {
    fn from(interval: CalendarInterval) -> Self {
        interval.0
    }
}

impl std::fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

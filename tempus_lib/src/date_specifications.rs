use crate::calendar_dates::CalendarDate;
use crate::calendar_intervals::CalendarInterval;
use crate::calendar_months::CalendarMonth;
use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// A rule that selects some dates of the calendar, like "every 15th of the
/// month" or "the fourth Thursday of November".
pub trait DateSpecification {
    /// The dates matching the rule within an interval, in order
    type Occurrences<'a>: Iterator<Item = CalendarDate>
    where
        Self: 'a;

    fn is_satisfied_by(&self, date: &CalendarDate) -> bool;

    /// The earliest date of the interval matching the rule
    fn first_occurrence_in(
        &self,
        interval: &CalendarInterval,
    ) -> Option<CalendarDate>;

    /// Lazily computes the dates of the interval matching the rule.  Each
    /// call returns a new, independent iterator.
    fn iterate_over<'a>(
        &'a self,
        interval: &'a CalendarInterval,
    ) -> Self::Occurrences<'a>;
}

/// Matches a single date
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedDateSpecification {
    date: CalendarDate,
}

impl FixedDateSpecification {
    pub fn new(date: CalendarDate) -> Self {
        FixedDateSpecification { date }
    }
}

impl DateSpecification for FixedDateSpecification {
    type Occurrences<'a> = std::option::IntoIter<CalendarDate>;

    fn is_satisfied_by(&self, date: &CalendarDate) -> bool {
        *date == self.date
    }

    fn first_occurrence_in(
        &self,
        interval: &CalendarInterval,
    ) -> Option<CalendarDate> {
        interval.contains(&self.date).then_some(self.date)
    }

    fn iterate_over<'a>(
        &'a self,
        interval: &'a CalendarInterval,
    ) -> Self::Occurrences<'a> {
        self.first_occurrence_in(interval).into_iter()
    }
}

// Every valid (month, day) pair exists in a leap year
const LEAP_YEAR: i32 = 2000;

/// A rule matching at most one date per year
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnualDateSpecification {
    /// The same day every year, e.g. December 25th.  February 29th only
    /// matches in leap years.
    Fixed { month: u32, day: u32 },

    /// The nth weekday of a month, e.g. the fourth Thursday of November
    Floating {
        month: u32,
        day_of_week: Weekday,
        occurrence: u8,
    },
}

impl AnnualDateSpecification {
    pub fn fixed(month: u32, day: u32) -> Result<Self> {
        CalendarMonth::new(LEAP_YEAR, month)?
            .at_day(day)
            .ok_or(Error::InvalidDayOfMonth(day))?;
        Ok(AnnualDateSpecification::Fixed { month, day })
    }

    pub fn floating(
        month: u32,
        day_of_week: Weekday,
        occurrence: u8,
    ) -> Result<Self> {
        CalendarMonth::new(LEAP_YEAR, month)?;
        if !(1..=5).contains(&occurrence) {
            return Err(Error::InvalidOccurrence(occurrence));
        }
        Ok(AnnualDateSpecification::Floating {
            month,
            day_of_week,
            occurrence,
        })
    }

    /// The matching date in the given year, if any
    pub fn of_year(&self, year: i32) -> Option<CalendarDate> {
        match *self {
            AnnualDateSpecification::Fixed { month, day } => {
                CalendarDate::from_ymd(year, month, day).ok()
            }
            AnnualDateSpecification::Floating {
                month,
                day_of_week,
                occurrence,
            } => CalendarMonth::new(year, month)
                .ok()?
                .nth_weekday(day_of_week, occurrence),
        }
    }
}

impl DateSpecification for AnnualDateSpecification {
    type Occurrences<'a> = Box<dyn Iterator<Item = CalendarDate> + 'a>;

    fn is_satisfied_by(&self, date: &CalendarDate) -> bool {
        self.of_year(date.year()) == Some(*date)
    }

    fn first_occurrence_in(
        &self,
        interval: &CalendarInterval,
    ) -> Option<CalendarDate> {
        self.iterate_over(interval).next()
    }

    fn iterate_over<'a>(
        &'a self,
        interval: &'a CalendarInterval,
    ) -> Self::Occurrences<'a> {
        let Some(start) = interval.start().value().copied() else {
            return Box::new(std::iter::empty());
        };
        let last_year = interval
            .end()
            .value()
            .map_or(NaiveDate::MAX.year(), CalendarDate::year);
        Box::new(
            (start.year()..=last_year)
                .filter_map(move |year| self.of_year(year))
                .skip_while(move |d| *d < start)
                .take_while(move |d| interval.contains(d)),
        )
    }
}

use crate::calendar_dates::CalendarDate;
use crate::calendar_intervals::CalendarInterval;
use crate::calendar_months::CalendarMonth;
use crate::date_specifications::DateSpecification;
use crate::errors::{Error, Result};
use chrono::Weekday;
use std::iter::FusedIterator;

/// A rule that matches at most one date in each month.
///
/// Implementors only need to tell which date (if any) matches in a given
/// month, the general [`DateSpecification`] operations are derived from it.
pub trait MonthlyDateSpecification {
    fn of_year_month(&self, month: CalendarMonth) -> Option<CalendarDate>;
}

impl<S: MonthlyDateSpecification> DateSpecification for S {
    type Occurrences<'a> = MonthlyIterator<'a, S> where S: 'a;

    fn is_satisfied_by(&self, date: &CalendarDate) -> bool {
        self.of_year_month(date.as_calendar_month()) == Some(*date)
    }

    /// Only the month of the interval's start and the following month are
    /// checked.
    fn first_occurrence_in(
        &self,
        interval: &CalendarInterval,
    ) -> Option<CalendarDate> {
        first_position(self, interval).map(|(_, date)| date)
    }

    fn iterate_over<'a>(
        &'a self,
        interval: &'a CalendarInterval,
    ) -> MonthlyIterator<'a, S> {
        MonthlyIterator::new(self, interval)
    }
}

/// Look for the first occurrence in the start month of the interval, then
/// in the next month.  Returns the month where it was found along with the
/// date.
fn first_position<S: MonthlyDateSpecification + ?Sized>(
    spec: &S,
    interval: &CalendarInterval,
) -> Option<(CalendarMonth, CalendarDate)> {
    let month = interval.start_month()?;
    let candidate = spec.of_year_month(month);
    if let Some(date) = candidate {
        if interval.contains(&date) {
            return Some((month, date));
        }
    }
    log::trace!("no occurrence in {month} within {interval}");

    let next = month.next_month()?;
    let date = spec.of_year_month(next)?;
    interval.contains(&date).then_some((next, date))
}

/// Where a [`MonthlyIterator`] is in its traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    /// Nothing computed yet
    NotStarted,

    /// The next date to return, and the month it belongs to
    Positioned {
        month: CalendarMonth,
        candidate: CalendarDate,
    },

    /// No more dates, forever
    Exhausted,
}

/// The occurrences of a monthly rule within an interval, one month after
/// the other.
///
/// The traversal stops at the first month that has no matching date, or
/// whose matching date is outside the interval.  For instance, a rule for
/// the 31st of each month stops at the first 30-day month.
pub struct MonthlyIterator<'a, S: ?Sized> {
    spec: &'a S,
    interval: &'a CalendarInterval,
    cursor: Cursor,
}

impl<'a, S: MonthlyDateSpecification + ?Sized> MonthlyIterator<'a, S> {
    pub fn new(spec: &'a S, interval: &'a CalendarInterval) -> Self {
        MonthlyIterator {
            spec,
            interval,
            cursor: Cursor::NotStarted,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether another date is available.  This computes the first
    /// occurrence on the first call, but never consumes anything.
    pub fn has_next(&mut self) -> bool {
        self.start();
        matches!(self.cursor, Cursor::Positioned { .. })
    }

    /// Same as `next`, but reports an error once all dates were returned
    pub fn next_occurrence(&mut self) -> Result<CalendarDate> {
        self.next().ok_or(Error::ExhaustedIterator)
    }

    fn start(&mut self) {
        if self.cursor == Cursor::NotStarted {
            self.cursor = match first_position(self.spec, self.interval) {
                Some((month, candidate)) => {
                    Cursor::Positioned { month, candidate }
                }
                None => Cursor::Exhausted,
            };
        }
    }

    /// The cursor for the month after `month`
    fn following(&self, month: CalendarMonth) -> Cursor {
        let Some(next) = month.next_month() else {
            return Cursor::Exhausted;
        };
        match self.spec.of_year_month(next) {
            Some(candidate) if self.interval.contains(&candidate) => {
                Cursor::Positioned {
                    month: next,
                    candidate,
                }
            }
            Some(candidate) => {
                log::trace!("{candidate} is past {}", self.interval);
                Cursor::Exhausted
            }
            None => {
                log::trace!("no occurrence in {next}, stopping");
                Cursor::Exhausted
            }
        }
    }
}

impl<'a, S: MonthlyDateSpecification + ?Sized> Iterator
    for MonthlyIterator<'a, S>
{
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        self.start();
        match self.cursor {
            Cursor::Positioned { month, candidate } => {
                self.cursor = self.following(month);
                Some(candidate)
            }
            Cursor::NotStarted | Cursor::Exhausted => None,
        }
    }
}

impl<'a, S: MonthlyDateSpecification + ?Sized> FusedIterator
    for MonthlyIterator<'a, S>
{
}

/// The same day every month, e.g. the 15th
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonthlyFixedDateSpecification {
    day: u32,
}

impl MonthlyFixedDateSpecification {
    pub fn new(day: u32) -> Result<Self> {
        if !(1..=31).contains(&day) {
            return Err(Error::InvalidDayOfMonth(day));
        }
        Ok(MonthlyFixedDateSpecification { day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl MonthlyDateSpecification for MonthlyFixedDateSpecification {
    fn of_year_month(&self, month: CalendarMonth) -> Option<CalendarDate> {
        month.at_day(self.day)
    }
}

/// The nth weekday of every month, e.g. the third Tuesday
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonthlyFloatingDateSpecification {
    day_of_week: Weekday,
    occurrence: u8,
}

impl MonthlyFloatingDateSpecification {
    pub fn new(day_of_week: Weekday, occurrence: u8) -> Result<Self> {
        if !(1..=5).contains(&occurrence) {
            return Err(Error::InvalidOccurrence(occurrence));
        }
        Ok(MonthlyFloatingDateSpecification {
            day_of_week,
            occurrence,
        })
    }
}

impl MonthlyDateSpecification for MonthlyFloatingDateSpecification {
    fn of_year_month(&self, month: CalendarMonth) -> Option<CalendarDate> {
        month.nth_weekday(self.day_of_week, self.occurrence)
    }
}

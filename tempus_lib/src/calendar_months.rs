use crate::calendar_dates::CalendarDate;
use crate::errors::{Error, Result};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A month of a specific year, like 2011-04.
/// Months are ordered chronologically.
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
#[serde(from = "CalendarDate", into = "CalendarDate")]
pub struct CalendarMonth {
    // Always the first day of the month
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| CalendarMonth { first })
            .ok_or(Error::InvalidMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// None past the last representable month
    pub fn next_month(&self) -> Option<Self> {
        self.plus_months(1)
    }

    pub fn previous_month(&self) -> Option<Self> {
        self.plus_months(-1)
    }

    pub fn plus_months(&self, count: i32) -> Option<Self> {
        let months = Months::new(count.unsigned_abs());
        if count >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        }
        .map(|first| CalendarMonth { first })
    }

    /// Number of months from self to other, negative if other is earlier
    pub fn months_until(&self, other: &CalendarMonth) -> i32 {
        (other.year() - self.year()) * 12 + other.month() as i32
            - self.month() as i32
    }

    pub fn number_of_days(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year()) => 29,
            2 => 28,
            _ => 31,
        }
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::from_naive(self.first)
    }

    pub fn last_day(&self) -> CalendarDate {
        // the last day of a valid month is always representable
        CalendarDate::from_naive(
            self.first + Days::new(u64::from(self.number_of_days() - 1)),
        )
    }

    /// The given day of this month, or None if the month is too short
    pub fn at_day(&self, day: u32) -> Option<CalendarDate> {
        self.first.with_day(day).map(CalendarDate::from_naive)
    }

    /// The nth (starting at 1) given weekday of this month, e.g. the third
    /// Tuesday.  None if the month has fewer such weekdays.
    pub fn nth_weekday(&self, weekday: Weekday, n: u8) -> Option<CalendarDate> {
        NaiveDate::from_weekday_of_month_opt(
            self.year(),
            self.month(),
            weekday,
            n,
        )
        .map(CalendarDate::from_naive)
    }

    /// The last given weekday of this month
    pub fn last_weekday(&self, weekday: Weekday) -> CalendarDate {
        let last = self.last_day();
        let back = (7 + last.day_of_week().num_days_from_monday()
            - weekday.num_days_from_monday())
            % 7;
        CalendarDate::from_naive(last.as_naive() - Days::new(u64::from(back)))
    }

    /// All days of the month, in order
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> {
        let month = self.month();
        self.first
            .iter_days()
            .take_while(move |d| d.month() == month)
            .map(CalendarDate::from_naive)
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

impl From<CalendarDate> for CalendarMonth {
    fn from(date: CalendarDate) -> Self {
        let d = date.as_naive();
        CalendarMonth {
            first: d - Days::new(u64::from(d.day0())),
        }
    }
}

impl From<CalendarMonth> for CalendarDate {
    fn from(month: CalendarMonth) -> Self {
        month.first_day()
    }
}

impl std::fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::calendar_dates::test::date;

    fn month(year: i32, month: u32) -> CalendarMonth {
        CalendarMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_create() {
        let m = month(2011, 4);
        assert_eq!(m.year(), 2011);
        assert_eq!(m.month(), 4);
        assert_eq!(m.to_string(), "2011-04");
        assert_eq!(
            CalendarMonth::new(2011, 13),
            Err(Error::InvalidMonth {
                year: 2011,
                month: 13
            })
        );
        assert_eq!(CalendarMonth::from(date(2011, 4, 30)), m);
        assert_eq!(CalendarDate::from(m), date(2011, 4, 1));
    }

    #[test]
    fn test_navigation() {
        let m = month(2011, 12);
        assert_eq!(m.next_month(), Some(month(2012, 1)));
        assert_eq!(m.previous_month(), Some(month(2011, 11)));
        assert_eq!(m.plus_months(-12), Some(month(2010, 12)));
        assert_eq!(m.plus_months(14), Some(month(2013, 2)));
        assert_eq!(month(2011, 4).months_until(&month(2012, 2)), 10);
        assert_eq!(month(2012, 2).months_until(&month(2011, 4)), -10);
        assert!(month(2011, 4) < month(2011, 5));
        assert!(month(2011, 12) < month(2012, 1));
        let last =
            CalendarMonth::from(CalendarDate::from_naive(NaiveDate::MAX));
        assert_eq!(last.next_month(), None);
        assert_eq!(last.last_day().as_naive(), NaiveDate::MAX);
    }

    #[test]
    fn test_days() {
        assert_eq!(month(2011, 2).number_of_days(), 28);
        assert_eq!(month(2012, 2).number_of_days(), 29);
        assert_eq!(month(1900, 2).number_of_days(), 28);
        assert_eq!(month(2000, 2).number_of_days(), 29);
        assert_eq!(month(2011, 4).number_of_days(), 30);
        assert_eq!(month(2011, 4).first_day(), date(2011, 4, 1));
        assert_eq!(month(2011, 4).last_day(), date(2011, 4, 30));
        assert_eq!(month(2012, 2).last_day(), date(2012, 2, 29));
        assert_eq!(month(2011, 4).at_day(15), Some(date(2011, 4, 15)));
        assert_eq!(month(2011, 4).at_day(31), None);
        assert_eq!(month(2011, 4).at_day(0), None);
        assert_eq!(month(2011, 2).dates().count(), 28);
        assert_eq!(month(2011, 4).dates().last(), Some(date(2011, 4, 30)));
    }

    #[test]
    fn test_weekdays() {
        // April 2011 starts on a Friday
        let m = month(2011, 4);
        assert_eq!(m.nth_weekday(Weekday::Fri, 1), Some(date(2011, 4, 1)));
        assert_eq!(m.nth_weekday(Weekday::Tue, 3), Some(date(2011, 4, 19)));
        assert_eq!(m.nth_weekday(Weekday::Fri, 5), Some(date(2011, 4, 29)));
        assert_eq!(m.nth_weekday(Weekday::Mon, 5), None);
        assert_eq!(m.last_weekday(Weekday::Sat), date(2011, 4, 30));
        assert_eq!(m.last_weekday(Weekday::Mon), date(2011, 4, 25));
    }

    #[test]
    fn test_serialized_shape() {
        assert_eq!(
            serde_json::to_string(&month(2011, 4)).unwrap(),
            r#""2011-04-01""#
        );
        let m: CalendarMonth = serde_json::from_str(r#""2011-04-17""#).unwrap();
        assert_eq!(m, month(2011, 4));
    }
}

use crate::calendar_dates::CalendarDate;
use crate::errors::{Error, Result};
use crate::rates::Ratio;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Units of time.
/// Units measured in months (month, quarter, year) cannot be converted to
/// the others, since months have variable lengths.
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
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeUnit {
    pub fn is_month_based(&self) -> bool {
        match self {
            TimeUnit::Month | TimeUnit::Quarter | TimeUnit::Year => true,
            TimeUnit::Millisecond
            | TimeUnit::Second
            | TimeUnit::Minute
            | TimeUnit::Hour
            | TimeUnit::Day
            | TimeUnit::Week => false,
        }
    }

    /// The unit all others of the same family convert to
    pub fn base_unit(&self) -> TimeUnit {
        if self.is_month_based() {
            TimeUnit::Month
        } else {
            TimeUnit::Millisecond
        }
    }

    /// Number of base units in one of self
    pub fn factor(&self) -> i64 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => 1_000,
            TimeUnit::Minute => 60_000,
            TimeUnit::Hour => 3_600_000,
            TimeUnit::Day => 86_400_000,
            TimeUnit::Week => 604_800_000,
            TimeUnit::Month => 1,
            TimeUnit::Quarter => 3,
            TimeUnit::Year => 12,
        }
    }

    pub fn is_convertible_to(&self, other: &TimeUnit) -> bool {
        self.is_month_based() == other.is_month_based()
    }

    fn name(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Year => "year",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A length of time, like "3 days" or "1 quarter".
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Duration {
    quantity: i64,
    unit: TimeUnit,
}

impl Duration {
    pub fn new(quantity: i64, unit: TimeUnit) -> Self {
        Duration { quantity, unit }
    }

    pub fn milliseconds(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Millisecond)
    }
    pub fn seconds(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Second)
    }
    pub fn minutes(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Minute)
    }
    pub fn hours(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Hour)
    }
    pub fn days(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Day)
    }
    pub fn weeks(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Week)
    }
    pub fn months(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Month)
    }
    pub fn quarters(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Quarter)
    }
    pub fn years(quantity: i64) -> Self {
        Duration::new(quantity, TimeUnit::Year)
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn is_zero(&self) -> bool {
        self.quantity == 0
    }

    /// The quantity expressed in the base unit (milliseconds or months)
    pub fn in_base_units(&self) -> Result<i64> {
        self.quantity
            .checked_mul(self.unit.factor())
            .ok_or(Error::Overflow)
    }

    fn base_units_wide(&self) -> i128 {
        i128::from(self.quantity) * i128::from(self.unit.factor())
    }

    fn check_compatible(&self, other: &Duration) -> Result<()> {
        if self.unit.is_convertible_to(&other.unit) {
            Ok(())
        } else {
            Err(Error::IncompatibleUnits {
                left: self.unit,
                right: other.unit,
            })
        }
    }

    /// Add two durations.  The result uses the unit of self when both have
    /// the same unit, the base unit otherwise.
    pub fn plus(&self, other: &Duration) -> Result<Duration> {
        self.check_compatible(other)?;
        if self.unit == other.unit {
            let quantity = self
                .quantity
                .checked_add(other.quantity)
                .ok_or(Error::Overflow)?;
            return Ok(Duration::new(quantity, self.unit));
        }
        let quantity = self
            .in_base_units()?
            .checked_add(other.in_base_units()?)
            .ok_or(Error::Overflow)?;
        Ok(Duration::new(quantity, self.unit.base_unit()))
    }

    pub fn minus(&self, other: &Duration) -> Result<Duration> {
        self.plus(&other.negated()?)
    }

    pub fn negated(&self) -> Result<Duration> {
        let quantity = self.quantity.checked_neg().ok_or(Error::Overflow)?;
        Ok(Duration::new(quantity, self.unit))
    }

    /// How many times other fits in self, as an exact ratio
    pub fn divided_by(&self, other: &Duration) -> Result<Ratio> {
        self.check_compatible(other)?;
        Ratio::of(
            Decimal::from(self.in_base_units()?),
            Decimal::from(other.in_base_units()?),
        )
    }

    /// The date this long after `date`.  Month based durations move by whole
    /// months, clamping the day to the end of the month.  Other units must
    /// be a whole number of days.
    pub fn add_to(&self, date: &CalendarDate) -> Result<CalendarDate> {
        if self.unit.is_month_based() {
            let months = i32::try_from(self.in_base_units()?)
                .map_err(|_| Error::Overflow)?;
            date.plus_months(months).ok_or(Error::Overflow)
        } else {
            let days = self.whole_days()?;
            date.plus_days(days).ok_or(Error::Overflow)
        }
    }

    pub fn subtract_from(&self, date: &CalendarDate) -> Result<CalendarDate> {
        self.negated()?.add_to(date)
    }

    fn whole_days(&self) -> Result<i64> {
        let millis = self.in_base_units()?;
        let per_day = TimeUnit::Day.factor();
        if millis % per_day != 0 {
            return Err(Error::IncompatibleUnits {
                left: self.unit,
                right: TimeUnit::Day,
            });
        }
        Ok(millis / per_day)
    }
}

/// Durations are equal when they represent the same length of time, so
/// 7 days equal 1 week.
impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.unit.is_convertible_to(&other.unit)
            && self.base_units_wide() == other.base_units_wide()
    }
}

impl Eq for Duration {}

/// Durations with incompatible units (days and months) are not comparable.
impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.unit.is_convertible_to(&other.unit) {
            Some(self.base_units_wide().cmp(&other.base_units_wide()))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quantity.unsigned_abs() == 1 {
            write!(f, "{} {}", self.quantity, self.unit)
        } else {
            write!(f, "{} {}s", self.quantity, self.unit)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::calendar_dates::test::date;
    use rust_decimal_macros::dec;

    #[test]
    fn test_units() {
        assert!(TimeUnit::Quarter.is_month_based());
        assert!(!TimeUnit::Week.is_month_based());
        assert!(TimeUnit::Year.is_convertible_to(&TimeUnit::Month));
        assert!(!TimeUnit::Day.is_convertible_to(&TimeUnit::Month));
        assert_eq!(TimeUnit::Year.base_unit(), TimeUnit::Month);
        assert_eq!(TimeUnit::Hour.base_unit(), TimeUnit::Millisecond);
        assert_eq!(TimeUnit::Week.to_string(), "week");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Duration::days(7), Duration::weeks(1));
        assert_eq!(Duration::years(1), Duration::quarters(4));
        assert_eq!(Duration::hours(24), Duration::days(1));
        assert_ne!(Duration::days(30), Duration::months(1));
        assert!(Duration::days(6) < Duration::weeks(1));
        assert!(Duration::months(13) > Duration::years(1));
        assert_eq!(Duration::days(30).partial_cmp(&Duration::months(1)), None);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            Duration::days(3).plus(&Duration::days(4)),
            Ok(Duration::days(7))
        );
        let sum = Duration::weeks(1).plus(&Duration::days(1)).unwrap();
        assert_eq!(sum.unit(), TimeUnit::Millisecond);
        assert_eq!(sum, Duration::days(8));
        assert_eq!(
            Duration::years(1).minus(&Duration::months(2)),
            Ok(Duration::months(10))
        );
        assert_eq!(
            Duration::days(1).plus(&Duration::months(1)),
            Err(Error::IncompatibleUnits {
                left: TimeUnit::Day,
                right: TimeUnit::Month,
            })
        );
        assert_eq!(
            Duration::new(i64::MAX, TimeUnit::Day).in_base_units(),
            Err(Error::Overflow)
        );
        assert_eq!(Duration::days(3).negated(), Ok(Duration::days(-3)));
        let min = Duration::new(i64::MIN, TimeUnit::Day);
        assert_eq!(min.negated(), Err(Error::Overflow));
        assert_eq!(Duration::days(0).minus(&min), Err(Error::Overflow));
        assert_eq!(
            min.subtract_from(&date(2011, 1, 31)),
            Err(Error::Overflow)
        );
        assert_eq!(
            Duration::weeks(1).divided_by(&Duration::days(2)),
            Ratio::of(dec!(7), dec!(2))
        );
    }

    #[test]
    fn test_dates() {
        let d = date(2011, 1, 31);
        assert_eq!(Duration::months(1).add_to(&d), Ok(date(2011, 2, 28)));
        assert_eq!(Duration::quarters(1).add_to(&d), Ok(date(2011, 4, 30)));
        assert_eq!(Duration::weeks(1).add_to(&d), Ok(date(2011, 2, 7)));
        assert_eq!(Duration::hours(48).add_to(&d), Ok(date(2011, 2, 2)));
        assert_eq!(Duration::years(1).subtract_from(&d), Ok(date(2010, 1, 31)));
        assert!(matches!(
            Duration::hours(5).add_to(&d),
            Err(Error::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::days(3).to_string(), "3 days");
        assert_eq!(Duration::months(1).to_string(), "1 month");
        assert_eq!(Duration::weeks(-1).to_string(), "-1 week");
        assert_eq!(
            Duration::new(i64::MIN, TimeUnit::Month).to_string(),
            "-9223372036854775808 months"
        );
    }
}

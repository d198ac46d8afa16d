use crate::durations::TimeUnit;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Interval(#[from] tempus_intervals::Error),

    #[error("{0}")]
    Parse(#[from] chrono::ParseError),

    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid month {year:04}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("invalid day of month {0}")]
    InvalidDayOfMonth(u32),

    #[error("occurrence of a weekday in a month must be in 1..=5, got {0}")]
    InvalidOccurrence(u8),

    #[error("cannot iterate over an interval with no start")]
    UnboundedStart,

    #[error("no more occurrences")]
    ExhaustedIterator,

    #[error("cannot combine amounts in {left} and {right}")]
    CurrencyMismatch { left: String, right: String },

    #[error("cannot convert between {left} and {right}")]
    IncompatibleUnits { left: TimeUnit, right: TimeUnit },

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;

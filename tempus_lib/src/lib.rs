//! Calendar dates, recurrence rules and money amounts.
//!
//! Dates and intervals of dates are built on `tempus_intervals`, so that an
//! interval may extend forever in either direction.  Recurring dates
//! (the 15th of each month, the fourth Thursday of November,...) are
//! described by a [`date_specifications::DateSpecification`], which
//! computes the matching dates of an interval lazily.

pub mod calendar_dates;
pub mod calendar_intervals;
pub mod calendar_months;
pub mod currencies;
pub mod date_specifications;
pub mod durations;
pub mod errors;
pub mod formatters;
pub mod money;
pub mod monthly_specifications;
pub mod rates;

//! This crate provides the limits of mathematical intervals, and the
//! intervals built from them.
//!
//! A limit is one end of an interval: a [`LimitValue`] (either a finite
//! value or unbounded), whether that value belongs to the interval, and
//! which side of the interval it bounds.
//!
//!  |Interval|Constructor                 |Description
//!  |--------|----------------------------|--------------
//!  | `[A,B]`|[`Interval::closed`]        |left-closed, right-closed
//!  | `(A,B)`|[`Interval::open`]          |left-open, right-open
//!  | `[A,B)`|[`Interval::over`]          |any combination of closed/open
//!  | `(,B]` |[`Interval::at_most`]       |left-unbounded, right-closed
//!  | `(,B)` |[`Interval::under`]         |left-unbounded, right-open
//!  | `[A,)` |[`Interval::at_least`]      |left-closed, right-unbounded
//!  | `(A,)` |[`Interval::more_than`]     |left-open, right-unbounded
//!  | `(,)`  |[`Interval::all`]           |doubly unbounded
//!  | `[A,A]`|[`Interval::single_element`]|a single value
//!
//! All limits are totally ordered (see [`IntervalLimit::compare`]), so
//! that the interval operations reduce to taking the min or max of limits:
//!
//! ```text
//!        [------ A ------]
//!               [----- B -------]
//!
//!               [--------]            Intersection (A & B)
//!        [------)                     Complement of B relative to A
//! ```
//!
//! When the two intervals do not overlap, we can compute:
//! ```text
//!      [---A---]   [----B----]
//!
//!              (---)              Gap
//! ```
//!
//! ```
//! use tempus_intervals::{Interval, LimitValue};
//! let intv = Interval::over(
//!     LimitValue::Finite(1), true, LimitValue::Unbounded, false).unwrap();
//! assert!(intv.contains(&1));
//! assert!(intv.contains(&1_000_000));
//! assert_eq!(intv, Interval::at_least(1));
//! ```

mod errors;
mod interval_limit;
mod intervals;
mod limit_value;

pub use crate::errors::{Error, Result};
pub use crate::interval_limit::IntervalLimit;
pub use crate::intervals::Interval;
pub use crate::limit_value::LimitValue;

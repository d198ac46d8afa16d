use crate::errors::{Error, Result};
use crate::interval_limit::IntervalLimit;
use crate::limit_value::LimitValue;
use serde::Serialize;
use std::cmp::{max, min, Ordering};

/// An interval of values, bounded by two [`IntervalLimit`].
///
/// The limits are always a lower-side and an upper-side limit, and the lower
/// value is never above the upper value.  Emptiness is still possible, for
/// instance `[A, A)`.
#[derive(Clone, Debug, Serialize)]
pub struct Interval<T> {
    lower: IntervalLimit<T>,
    upper: IntervalLimit<T>,
}

impl<T: Ord> Interval<T> {
    /// Builds an interval from its two limits.
    /// Fails if the limits are given for the wrong side, or if the lower
    /// value is above the upper value.
    pub fn new(
        lower: IntervalLimit<T>,
        upper: IntervalLimit<T>,
    ) -> Result<Self> {
        if !lower.is_lower() {
            return Err(Error::MisplacedLimit("upper"));
        }
        if !upper.is_upper() {
            return Err(Error::MisplacedLimit("lower"));
        }
        if let (LimitValue::Finite(l), LimitValue::Finite(u)) =
            (lower.value(), upper.value())
        {
            if l > u {
                return Err(Error::InvertedLimits);
            }
        }
        Ok(Self { lower, upper })
    }

    /// An interval with either limit possibly unbounded, and each limit
    /// included or not.
    pub fn over(
        lower: LimitValue<T>,
        lower_included: bool,
        upper: LimitValue<T>,
        upper_included: bool,
    ) -> Result<Self> {
        Self::new(
            IntervalLimit::lower(lower_included, lower),
            IntervalLimit::upper(upper_included, upper),
        )
    }

    /// Construct a left-closed, right-closed interval (`[A,B]`)
    pub fn closed(lower: T, upper: T) -> Result<Self> {
        Self::over(lower.into(), true, upper.into(), true)
    }

    /// Construct a left-open, right-open interval (`(A,B)`)
    pub fn open(lower: T, upper: T) -> Result<Self> {
        Self::over(lower.into(), false, upper.into(), false)
    }

    /// Construct a left-closed, right-unbounded interval (`[A,)`)
    pub fn at_least(lower: T) -> Self {
        Self {
            lower: IntervalLimit::lower(true, lower.into()),
            upper: IntervalLimit::upper(false, LimitValue::Unbounded),
        }
    }

    /// Construct a left-open, right-unbounded interval (`(A,)`)
    pub fn more_than(lower: T) -> Self {
        Self {
            lower: IntervalLimit::lower(false, lower.into()),
            upper: IntervalLimit::upper(false, LimitValue::Unbounded),
        }
    }

    /// Construct a left-unbounded, right-closed interval (`(,B]`)
    pub fn at_most(upper: T) -> Self {
        Self {
            lower: IntervalLimit::lower(false, LimitValue::Unbounded),
            upper: IntervalLimit::upper(true, upper.into()),
        }
    }

    /// Construct a left-unbounded, right-open interval (`(,B)`)
    pub fn under(upper: T) -> Self {
        Self {
            lower: IntervalLimit::lower(false, LimitValue::Unbounded),
            upper: IntervalLimit::upper(false, upper.into()),
        }
    }

    /// Construct a doubly unbounded interval (`(,)`) that contains all
    /// possible values.
    pub fn all() -> Self {
        Self {
            lower: IntervalLimit::lower(false, LimitValue::Unbounded),
            upper: IntervalLimit::upper(false, LimitValue::Unbounded),
        }
    }

    pub fn lower_limit(&self) -> &IntervalLimit<T> {
        &self.lower
    }

    pub fn upper_limit(&self) -> &IntervalLimit<T> {
        &self.upper
    }

    /// The lower bound, Unbounded for -infinity
    pub fn lower(&self) -> &LimitValue<T> {
        self.lower.value()
    }

    /// The upper bound, Unbounded for +infinity
    pub fn upper(&self) -> &LimitValue<T> {
        self.upper.value()
    }

    pub fn has_lower_limit(&self) -> bool {
        !self.lower.is_infinity()
    }

    pub fn has_upper_limit(&self) -> bool {
        !self.upper.is_infinity()
    }

    /// Whether the lower bound is part of the interval.
    /// Always false when the lower bound is -infinity.
    pub fn includes_lower_limit(&self) -> bool {
        self.lower.is_closed()
    }

    /// Whether the upper bound is part of the interval.
    /// Always false when the upper bound is +infinity.
    pub fn includes_upper_limit(&self) -> bool {
        self.upper.is_closed()
    }

    /// Both limits included
    pub fn is_closed(&self) -> bool {
        self.lower.is_closed() && self.upper.is_closed()
    }

    /// Neither limit included
    pub fn is_open(&self) -> bool {
        self.lower.is_open() && self.upper.is_open()
    }

    /// True if the interval contains no element, e.g. `(A, A)` or `[A, A)`.
    pub fn is_empty(&self) -> bool {
        nothing_between(&self.lower, &self.upper)
    }

    /// True if self is of the form `[A, A]`.
    pub fn is_single_element(&self) -> bool {
        match (self.lower.value(), self.upper.value()) {
            (LimitValue::Finite(l), LimitValue::Finite(u)) => {
                l == u && self.is_closed()
            }
            _ => false,
        }
    }

    /// Whether value is contained in the interval
    pub fn contains(&self, value: &T) -> bool {
        self.lower.admits(value) && self.upper.admits(value)
    }

    /// Whether the limit value is contained in the interval.  An unbounded
    /// value is never part of an interval, even one that is unbounded on
    /// that side.
    pub fn includes(&self, value: &LimitValue<T>) -> bool {
        match value {
            LimitValue::Finite(v) => self.contains(v),
            LimitValue::Unbounded => false,
        }
    }

    /// Whether every value in self is strictly less than (<) X.
    /// ```txt
    ///    [------] .
    ///             X    => self is below X
    /// ```
    pub fn is_below(&self, x: &T) -> bool {
        match self.upper.value() {
            LimitValue::Unbounded => false,
            LimitValue::Finite(u) => match u.cmp(x) {
                Ordering::Less => true,
                Ordering::Equal => self.upper.is_open(),
                Ordering::Greater => false,
            },
        }
    }

    /// Whether every value in self is strictly greater than (>) X.
    /// ```txt
    ///    . [------]
    ///    X           => self is above X
    /// ```
    pub fn is_above(&self, x: &T) -> bool {
        match self.lower.value() {
            LimitValue::Unbounded => false,
            LimitValue::Finite(l) => match l.cmp(x) {
                Ordering::Greater => true,
                Ordering::Equal => self.lower.is_open(),
                Ordering::Less => false,
            },
        }
    }

    /// Whether self contains all values of the second interval (and possibly
    /// more).
    pub fn covers(&self, other: &Self) -> bool {
        other.is_empty()
            || (self.lower <= other.lower && other.upper <= self.upper)
    }

    /// Whether the two intervals overlap, i.e. have at least one point in
    /// common
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && !nothing_between(
                max(&self.lower, &other.lower),
                min(&self.upper, &other.upper),
            )
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Returns an interval that contains a single value (`[value,value]`)
    pub fn single_element(value: T) -> Self {
        Self {
            lower: IntervalLimit::lower(true, value.clone().into()),
            upper: IntervalLimit::upper(true, value.into()),
        }
    }

    /// Returns the values common to both intervals, or None if they do not
    /// intersect.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if self.intersects(other) {
            Some(Self {
                lower: max(&self.lower, &other.lower).clone(),
                upper: min(&self.upper, &other.upper).clone(),
            })
        } else {
            None
        }
    }

    /// Returns the values that lie strictly between two disjoint intervals.
    /// None if the intervals intersect, if either is empty, or if they are
    /// contiguous (like `[1, 5)` and `[5, 9]`).
    /// ```txt
    ///      [---A---]   [----B----]
    ///              (---)              gap
    /// ```
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.is_empty() || other.is_empty() || self.intersects(other) {
            return None;
        }
        let lower = min(&self.upper, &other.upper).complement();
        let upper = max(&self.lower, &other.lower).complement();
        if nothing_between(&lower, &upper) {
            None
        } else {
            Some(Self { lower, upper })
        }
    }

    /// Returns the parts of other that are not covered by self.
    /// ```txt
    ///        [------ other ------]
    ///             [-- self --]
    ///        [----)          (---]     complement
    /// ```
    pub fn complement_relative_to(&self, other: &Self) -> Vec<Self> {
        if !self.intersects(other) {
            return vec![other.clone()];
        }
        let mut result = Vec::with_capacity(2);
        if self.lower > other.lower {
            result.push(Self {
                lower: other.lower.clone(),
                upper: self.lower.complement(),
            });
        }
        if self.upper < other.upper {
            result.push(Self {
                lower: self.upper.complement(),
                upper: other.upper.clone(),
            });
        }
        result.retain(|i| !i.is_empty());
        result
    }
}

/// Whether no value can be found between a lower and an upper limit
fn nothing_between<T: Ord>(
    lower: &IntervalLimit<T>,
    upper: &IntervalLimit<T>,
) -> bool {
    match (lower.value(), upper.value()) {
        (LimitValue::Finite(l), LimitValue::Finite(u)) => match l.cmp(u) {
            Ordering::Less => false,
            Ordering::Equal => !(lower.is_closed() && upper.is_closed()),
            Ordering::Greater => true,
        },
        _ => false,
    }
}

impl<T: Ord> PartialEq for Interval<T> {
    /// True if the two intervals contain the same values.  All empty
    /// intervals are equal.
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            !other.is_empty()
                && self.lower == other.lower
                && self.upper == other.upper
        }
    }
}

impl<T: Ord> Eq for Interval<T> {}

impl<T: ::core::fmt::Display + Ord> ::core::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }
        match self.lower.value() {
            LimitValue::Unbounded => write!(f, "(")?,
            LimitValue::Finite(p) if self.lower.is_closed() => {
                write!(f, "[{}", p)?
            }
            LimitValue::Finite(p) => write!(f, "({}", p)?,
        }
        match self.upper.value() {
            LimitValue::Unbounded => write!(f, ", )"),
            LimitValue::Finite(p) if self.upper.is_closed() => {
                write!(f, ", {}]", p)
            }
            LimitValue::Finite(p) => write!(f, ", {})", p),
        }
    }
}

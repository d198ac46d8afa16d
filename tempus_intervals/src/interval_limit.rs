use crate::limit_value::LimitValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// One end of an interval: a limit value, whether that value is part of the
/// interval (closed) and which side of the interval it bounds.
///
/// An unbounded limit is always open, whatever was requested when building
/// it: it never touches an actual value.
///
/// Limits are totally ordered, see [`IntervalLimit::compare`].  At a given
/// value, the four finite limits are ordered as
/// ```text
///     [5   <   (5   <   5)   <   5]
/// ```
/// and the unbounded lower limit is below everything, the unbounded upper
/// limit above everything.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "LimitParts<T>")]
pub struct IntervalLimit<T> {
    value: LimitValue<T>,
    closed: bool,
    lower: bool,
}

#[derive(Deserialize)]
struct LimitParts<T> {
    value: LimitValue<T>,
    closed: bool,
    lower: bool,
}

impl<T> From<LimitParts<T>> for IntervalLimit<T> {
    fn from(parts: LimitParts<T>) -> Self {
        IntervalLimit::new(parts.closed, parts.lower, parts.value)
    }
}

impl<T> IntervalLimit<T> {
    pub fn new(closed: bool, lower: bool, value: LimitValue<T>) -> Self {
        let closed = closed && value.is_finite();
        Self {
            value,
            closed,
            lower,
        }
    }

    /// A limit bounding the left side of an interval
    pub fn lower(closed: bool, value: LimitValue<T>) -> Self {
        Self::new(closed, true, value)
    }

    /// A limit bounding the right side of an interval
    pub fn upper(closed: bool, value: LimitValue<T>) -> Self {
        Self::new(closed, false, value)
    }

    pub fn value(&self) -> &LimitValue<T> {
        &self.value
    }

    pub fn into_value(self) -> LimitValue<T> {
        self.value
    }

    /// True if this limit has no value
    pub fn is_infinity(&self) -> bool {
        self.value.is_unbounded()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub fn is_lower(&self) -> bool {
        self.lower
    }

    pub fn is_upper(&self) -> bool {
        !self.lower
    }

    /// The same value seen from the other side, with the opposite closedness.
    /// `5)` becomes `[5`, and `(5` becomes `5]`.  This is the limit of the
    /// values just past self.
    pub fn complement(&self) -> Self
    where
        T: Clone,
    {
        Self::new(!self.closed, !self.lower, self.value.clone())
    }
}

impl<T: Ord> IntervalLimit<T> {
    /// Three-way comparison of two limits.
    ///
    /// * two unbounded limits are equal on the same side, and the lower one
    ///   is less otherwise.
    /// * a single unbounded limit is less than the other limit if it is a
    ///   lower limit, greater if it is an upper limit.
    /// * finite limits compare by value first.  At the same value, a lower
    ///   limit is less than an upper limit; two lower limits put the closed
    ///   one first, two upper limits put the closed one last.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (LimitValue::Unbounded, LimitValue::Unbounded) => {
                side_order(self.lower, other.lower)
            }
            (LimitValue::Unbounded, LimitValue::Finite(_)) => {
                if self.lower {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (LimitValue::Finite(_), LimitValue::Unbounded) => {
                if other.lower {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (LimitValue::Finite(a), LimitValue::Finite(b)) => {
                a.cmp(b).then_with(|| self.compare_at_same_value(other))
            }
        }
    }

    fn compare_at_same_value(&self, other: &Self) -> Ordering {
        match (self.lower, other.lower) {
            (true, true) => other.closed.cmp(&self.closed),
            (false, false) => self.closed.cmp(&other.closed),
            (true, false) | (false, true) => {
                side_order(self.lower, other.lower)
            }
        }
    }

    /// Whether the value lies on the inner side of this limit, i.e. to the
    /// right of a lower limit or to the left of an upper limit.
    pub fn admits(&self, value: &T) -> bool {
        match &self.value {
            LimitValue::Unbounded => true,
            LimitValue::Finite(v) => match v.cmp(value) {
                Ordering::Less => self.lower,
                Ordering::Greater => !self.lower,
                Ordering::Equal => self.closed,
            },
        }
    }
}

/// Lower limits sort before upper limits
fn side_order(left_is_lower: bool, right_is_lower: bool) -> Ordering {
    match (left_is_lower, right_is_lower) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) | (false, false) => Ordering::Equal,
    }
}

impl<T: Ord> PartialEq for IntervalLimit<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for IntervalLimit<T> {}

impl<T: Ord> PartialOrd for IntervalLimit<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T: Ord> Ord for IntervalLimit<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T: Hash> Hash for IntervalLimit<T> {
    //  compare() only returns Equal when value and both flags coincide (an
    //  unbounded limit always has closed=false), so hashing all the fields
    //  agrees with Eq.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.closed.hash(state);
        self.lower.hash(state);
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for IntervalLimit<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match (&self.value, self.lower) {
            (LimitValue::Unbounded, true) => write!(f, "(-Infinity"),
            (LimitValue::Unbounded, false) => write!(f, "Infinity)"),
            (LimitValue::Finite(v), true) => {
                write!(f, "{}{}", if self.closed { "[" } else { "(" }, v)
            }
            (LimitValue::Finite(v), false) => {
                write!(f, "{}{}", v, if self.closed { "]" } else { ")" })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn lower(closed: bool, v: i32) -> IntervalLimit<i32> {
        IntervalLimit::lower(closed, LimitValue::Finite(v))
    }
    fn upper(closed: bool, v: i32) -> IntervalLimit<i32> {
        IntervalLimit::upper(closed, LimitValue::Finite(v))
    }
    fn unbounded_lower() -> IntervalLimit<i32> {
        IntervalLimit::lower(false, LimitValue::Unbounded)
    }
    fn unbounded_upper() -> IntervalLimit<i32> {
        IntervalLimit::upper(false, LimitValue::Unbounded)
    }

    /// Every kind of limit around a few values
    fn all_limits() -> Vec<IntervalLimit<i32>> {
        let mut result = vec![
            unbounded_lower(),
            unbounded_upper(),
            IntervalLimit::lower(true, LimitValue::Unbounded),
            IntervalLimit::upper(true, LimitValue::Unbounded),
        ];
        for v in [-1, 0, 5, 6] {
            for closed in [true, false] {
                result.push(lower(closed, v));
                result.push(upper(closed, v));
            }
        }
        result
    }

    fn hash_of(limit: &IntervalLimit<i32>) -> u64 {
        let mut h = DefaultHasher::new();
        limit.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_unbounded_is_open() {
        let l = IntervalLimit::<i32>::lower(true, LimitValue::Unbounded);
        assert!(l.is_infinity());
        assert!(l.is_open());
        assert!(!l.is_closed());
        assert!(l.is_lower());

        let u = IntervalLimit::<i32>::upper(true, LimitValue::Unbounded);
        assert!(u.is_open());
        assert!(u.is_upper());

        let f = upper(true, 3);
        assert!(!f.is_infinity());
        assert!(f.is_closed());
        assert_eq!(f.value(), &LimitValue::Finite(3));
    }

    #[test]
    fn test_unbounded() {
        assert_eq!(
            unbounded_lower().compare(&unbounded_lower()),
            Ordering::Equal
        );
        assert_eq!(
            unbounded_upper().compare(&unbounded_upper()),
            Ordering::Equal
        );
        assert!(unbounded_lower() < unbounded_upper());
        assert!(unbounded_upper() > unbounded_lower());

        for f in all_limits().iter().filter(|l| !l.is_infinity()) {
            assert!(unbounded_lower() < *f, "(-Infinity < {f}");
            assert!(*f > unbounded_lower());
            assert!(unbounded_upper() > *f, "Infinity) > {f}");
            assert!(*f < unbounded_upper());
        }
    }

    #[test]
    fn test_same_value() {
        // closed/open tie-break
        assert!(lower(true, 5) < lower(false, 5));
        assert!(upper(true, 5) > upper(false, 5));
        assert_eq!(lower(true, 5), lower(true, 5));
        assert_eq!(upper(false, 5), upper(false, 5));

        // lower before upper, for every closedness
        for lc in [true, false] {
            for uc in [true, false] {
                assert!(lower(lc, 5) < upper(uc, 5));
                assert!(upper(uc, 5) > lower(lc, 5));
            }
        }
    }

    #[test]
    fn test_different_values() {
        // side and closedness are irrelevant
        assert!(upper(true, 4) < lower(false, 5));
        assert!(lower(false, 4) < upper(false, 5));
        assert!(lower(true, 6) > upper(true, 5));
        assert!(upper(false, 6) > upper(true, 5));
    }

    #[test]
    fn test_total_order() {
        let limits = all_limits();
        for a in &limits {
            assert_eq!(a.compare(a), Ordering::Equal);
            for b in &limits {
                let ab = a.compare(b);
                assert_eq!(ab, b.compare(a).reverse(), "{a} vs {b}");
                if ab == Ordering::Equal {
                    assert_eq!(hash_of(a), hash_of(b), "{a} == {b}");
                }
                for c in &limits {
                    if a <= b && b <= c {
                        assert!(a <= c, "{a} <= {b} <= {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort() {
        let mut limits = vec![
            upper(true, 5),
            unbounded_upper(),
            lower(false, 5),
            upper(false, 5),
            lower(true, 5),
            unbounded_lower(),
            lower(true, 2),
        ];
        limits.sort();
        let shown: Vec<String> = limits.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            shown,
            ["(-Infinity", "[2", "[5", "(5", "5)", "5]", "Infinity)"]
        );
    }

    #[test]
    fn test_admits() {
        assert!(lower(true, 5).admits(&5));
        assert!(!lower(false, 5).admits(&5));
        assert!(lower(false, 5).admits(&6));
        assert!(!lower(true, 5).admits(&4));
        assert!(upper(true, 5).admits(&5));
        assert!(!upper(false, 5).admits(&5));
        assert!(upper(false, 5).admits(&4));
        assert!(unbounded_lower().admits(&i32::MIN));
        assert!(unbounded_upper().admits(&i32::MAX));
    }

    #[test]
    fn test_complement() {
        assert_eq!(upper(false, 5).complement(), lower(true, 5));
        assert_eq!(lower(false, 5).complement(), upper(true, 5));
        assert_eq!(upper(true, 5).complement(), lower(false, 5));
    }

    #[test]
    fn test_deserialize_keeps_unbounded_open() {
        let l: IntervalLimit<i32> = serde_json::from_str(
            r#"{"value":"Unbounded","closed":true,"lower":false}"#,
        )
        .unwrap();
        assert!(l.is_open());
        assert_eq!(l, unbounded_upper());
        assert_eq!(
            serde_json::to_string(&lower(true, 3)).unwrap(),
            r#"{"value":{"Finite":3},"closed":true,"lower":true}"#
        );
    }
}

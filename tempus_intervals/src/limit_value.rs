use serde::{Deserialize, Serialize};

/// The value carried by one end of an interval: either a concrete bound, or
/// the explicit absence of a bound.
///
/// Variant order matters: the derived `Ord` places `Unbounded` after every
/// `Finite` value, whichever side of an interval it is later used on.  The
/// side is only known to [`crate::IntervalLimit`].
///
/// ```
/// use tempus_intervals::LimitValue;
/// assert!(LimitValue::Finite(1_000) < LimitValue::Unbounded);
/// assert!(LimitValue::Finite(1) < LimitValue::Finite(2));
/// assert_ne!(LimitValue::Finite(1), LimitValue::Unbounded);
/// ```
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
pub enum LimitValue<T> {
    Finite(T),
    Unbounded,
}

impl<T> LimitValue<T> {
    /// Wraps an optional value, `None` meaning no limit.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => LimitValue::Finite(v),
            None => LimitValue::Unbounded,
        }
    }

    /// The bound, or None when unbounded
    pub fn value(&self) -> Option<&T> {
        match self {
            LimitValue::Finite(v) => Some(v),
            LimitValue::Unbounded => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            LimitValue::Finite(v) => Some(v),
            LimitValue::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, LimitValue::Unbounded)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, LimitValue::Finite(_))
    }

    /// Converts from `LimitValue<T>` to `LimitValue<&T>`
    pub fn as_ref(&self) -> LimitValue<&T> {
        match self {
            LimitValue::Finite(v) => LimitValue::Finite(v),
            LimitValue::Unbounded => LimitValue::Unbounded,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LimitValue<U> {
        match self {
            LimitValue::Finite(v) => LimitValue::Finite(f(v)),
            LimitValue::Unbounded => LimitValue::Unbounded,
        }
    }
}

impl<T> From<T> for LimitValue<T> {
    fn from(value: T) -> Self {
        LimitValue::Finite(value)
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for LimitValue<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            LimitValue::Finite(v) => write!(f, "{}", v),
            LimitValue::Unbounded => write!(f, "Infinity"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ord() {
        let one = LimitValue::Finite(1);
        let two = LimitValue::Finite(2);
        let inf = LimitValue::<i32>::Unbounded;
        assert!(one < two);
        assert!(two < inf);
        assert!(one < inf);
        assert_eq!(inf, LimitValue::Unbounded);
        assert_eq!(inf.cmp(&LimitValue::Unbounded), std::cmp::Ordering::Equal);
        assert_ne!(one, inf);
        assert_eq!(LimitValue::Finite(i32::MAX).max(inf), inf);
    }

    #[test]
    fn test_accessors() {
        let one = LimitValue::from(1);
        assert_eq!(one.value(), Some(&1));
        assert!(one.is_finite());
        assert!(!one.is_unbounded());
        assert_eq!(one.map(|v| v * 10), LimitValue::Finite(10));

        let none = LimitValue::<u8>::from_option(None);
        assert!(none.is_unbounded());
        assert_eq!(none.value(), None);
        assert_eq!(none.into_value(), None);
        assert_eq!(LimitValue::from_option(Some(3)).into_value(), Some(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(LimitValue::Finite(12).to_string(), "12");
        assert_eq!(LimitValue::<i32>::Unbounded.to_string(), "Infinity");
    }

    #[test]
    fn test_serialized_shape() {
        assert_eq!(
            serde_json::to_string(&LimitValue::Finite(5)).unwrap(),
            r#"{"Finite":5}"#
        );
        assert_eq!(
            serde_json::to_string(&LimitValue::<i32>::Unbounded).unwrap(),
            r#""Unbounded""#
        );
    }
}

use crate::durations::Duration;
use crate::errors::{Error, Result};
use crate::money::Money;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An exact quotient of two decimals, only rounded when converted back to a
/// decimal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Ratio {
    numerator: Decimal,
    denominator: Decimal,
}

impl Ratio {
    pub fn of(numerator: Decimal, denominator: Decimal) -> Result<Self> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Ratio {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> Decimal {
        self.numerator
    }

    pub fn denominator(&self) -> Decimal {
        self.denominator
    }

    pub fn decimal_value(
        &self,
        scale: u32,
        strategy: RoundingStrategy,
    ) -> Result<Decimal> {
        let value = self
            .numerator
            .checked_div(self.denominator)
            .ok_or(Error::Overflow)?;
        Ok(value.round_dp_with_strategy(scale, strategy))
    }

    pub fn times(&self, multiplier: Decimal) -> Result<Ratio> {
        Ok(Ratio {
            numerator: self
                .numerator
                .checked_mul(multiplier)
                .ok_or(Error::Overflow)?,
            denominator: self.denominator,
        })
    }

    /// Computes `value * self`, multiplying before dividing so that no
    /// precision is lost on exact results.
    pub fn apply_to(&self, value: Decimal) -> Result<Decimal> {
        value
            .checked_mul(self.numerator)
            .and_then(|v| v.checked_div(self.denominator))
            .ok_or(Error::Overflow)
    }
}

/// Ratios are equal when they represent the same quotient, so 2/4 == 1/2.
impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        match (
            self.numerator.checked_mul(other.denominator),
            other.numerator.checked_mul(self.denominator),
        ) {
            (Some(left), Some(right)) => left == right,
            (None, _) | (_, None) => match (
                self.numerator.checked_div(self.denominator),
                other.numerator.checked_div(other.denominator),
            ) {
                (Some(left), Some(right)) => left == right,
                (None, _) | (_, None) => {
                    self.numerator == other.numerator
                        && self.denominator == other.denominator
                }
            },
        }
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A quantity per unit of time, like "3 per hour".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeRate {
    quantity: Decimal,
    per: Duration,
}

impl TimeRate {
    pub fn new(quantity: Decimal, per: Duration) -> Self {
        TimeRate { quantity, per }
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn per(&self) -> Duration {
        self.per
    }

    /// The total quantity over the given duration
    pub fn over(&self, duration: &Duration) -> Result<Decimal> {
        duration.divided_by(&self.per)?.apply_to(self.quantity)
    }

    pub fn over_rounded(
        &self,
        duration: &Duration,
        scale: u32,
        strategy: RoundingStrategy,
    ) -> Result<Decimal> {
        Ok(self
            .over(duration)?
            .round_dp_with_strategy(scale, strategy))
    }
}

impl std::fmt::Display for TimeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} per {}", self.quantity, self.per)
    }
}

/// An amount of money per unit of time, like a salary or a rent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoneyTimeRate {
    rate: Money,
    per: Duration,
}

impl MoneyTimeRate {
    pub fn new(rate: Money, per: Duration) -> Self {
        MoneyTimeRate { rate, per }
    }

    pub fn rate(&self) -> &Money {
        &self.rate
    }

    pub fn per(&self) -> Duration {
        self.per
    }

    /// The money accumulated over the given duration, rounded to the
    /// currency's precision (banker's rounding).
    pub fn over(&self, duration: &Duration) -> Result<Money> {
        self.over_rounded(duration, RoundingStrategy::MidpointNearestEven)
    }

    pub fn over_rounded(
        &self,
        duration: &Duration,
        strategy: RoundingStrategy,
    ) -> Result<Money> {
        let amount = duration
            .divided_by(&self.per)?
            .apply_to(self.rate.amount())?;
        Ok(Money::with_rounding(
            amount,
            self.rate.currency().clone(),
            strategy,
        ))
    }
}

impl std::fmt::Display for MoneyTimeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} per {}", self.rate, self.per)
    }
}

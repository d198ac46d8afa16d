use crate::currencies::Currency;
use crate::durations::Duration;
use crate::errors::{Error, Result};
use crate::rates::{MoneyTimeRate, Ratio};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An amount in a given currency.
///
/// The amount is always rounded to the number of fraction digits of the
/// currency.  Amounts in different currencies cannot be combined, so the
/// arithmetic operations return errors instead of implementing `Add` and
/// `Sub`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MoneyParts")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

#[derive(Deserialize)]
struct MoneyParts {
    amount: Decimal,
    currency: Currency,
}

impl From<MoneyParts> for Money {
    fn from(parts: MoneyParts) -> Self {
        Money::new(parts.amount, parts.currency)
    }
}

impl Money {
    /// Rounds with banker's rounding (to the nearest, ties to even)
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Money::with_rounding(
            amount,
            currency,
            RoundingStrategy::MidpointNearestEven,
        )
    }

    pub fn with_rounding(
        amount: Decimal,
        currency: Currency,
        strategy: RoundingStrategy,
    ) -> Self {
        let rounded = amount.round_dp_with_strategy(
            u32::from(currency.fraction_digits()),
            strategy,
        );
        if rounded != amount {
            log::trace!("rounded {amount} {currency} to {rounded}");
        }
        Money {
            amount: rounded,
            currency,
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Money {
            amount: Decimal::ZERO,
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn negated(&self) -> Money {
        Money {
            amount: -self.amount,
            currency: self.currency.clone(),
        }
    }

    pub fn abs(&self) -> Money {
        Money {
            amount: self.amount.abs(),
            currency: self.currency.clone(),
        }
    }

    fn check_same_currency(&self, other: &Money) -> Result<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(Error::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }

    pub fn plus(&self, other: &Money) -> Result<Money> {
        self.check_same_currency(other)?;
        Ok(Money {
            amount: self
                .amount
                .checked_add(other.amount)
                .ok_or(Error::Overflow)?,
            currency: self.currency.clone(),
        })
    }

    pub fn minus(&self, other: &Money) -> Result<Money> {
        self.plus(&other.negated())
    }

    /// Multiply, rounding the result with banker's rounding
    pub fn times(&self, factor: Decimal) -> Result<Money> {
        self.times_rounded(factor, RoundingStrategy::MidpointNearestEven)
    }

    pub fn times_rounded(
        &self,
        factor: Decimal,
        strategy: RoundingStrategy,
    ) -> Result<Money> {
        let amount = self.amount.checked_mul(factor).ok_or(Error::Overflow)?;
        Ok(Money::with_rounding(amount, self.currency.clone(), strategy))
    }

    pub fn divided_by(
        &self,
        divisor: Decimal,
        strategy: RoundingStrategy,
    ) -> Result<Money> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let amount = self.amount.checked_div(divisor).ok_or(Error::Overflow)?;
        Ok(Money::with_rounding(amount, self.currency.clone(), strategy))
    }

    /// How many times other fits in self
    pub fn ratio_to(&self, other: &Money) -> Result<Ratio> {
        self.check_same_currency(other)?;
        Ratio::of(self.amount, other.amount)
    }

    /// Adds all amounts, which must all be in the given currency
    pub fn sum<'a, I>(values: I, currency: Currency) -> Result<Money>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        values
            .into_iter()
            .try_fold(Money::zero(currency), |total, v| total.plus(v))
    }

    /// Split into `parts` amounts as equal as possible.  The remainder is
    /// distributed one minor unit (e.g. one cent) at a time to the first
    /// parts, so that the parts always add up to self.
    pub fn divided_evenly_into_parts(&self, parts: u32) -> Result<Vec<Money>> {
        if parts == 0 {
            return Err(Error::DivisionByZero);
        }
        let minor = Decimal::new(1, u32::from(self.currency.fraction_digits()));
        let count = Decimal::from(parts);
        let units = self.amount.checked_div(minor).ok_or(Error::Overflow)?;
        let base = (units / count).trunc();
        let remainder = units - base * count;
        let step = if remainder.is_sign_negative() {
            -minor
        } else {
            minor
        };
        let extra = remainder.abs();

        Ok((0..parts)
            .map(|idx| {
                let bump = if Decimal::from(idx) < extra {
                    step
                } else {
                    Decimal::ZERO
                };
                Money {
                    amount: base * minor + bump,
                    currency: self.currency.clone(),
                }
            })
            .collect())
    }

    /// This amount for each duration, e.g. a daily rate
    pub fn per(&self, duration: Duration) -> MoneyTimeRate {
        MoneyTimeRate::new(self.clone(), duration)
    }
}

/// Amounts in different currencies are not comparable
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.currency == other.currency {
            Some(self.amount.cmp(&other.amount))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.*} {}",
            usize::from(self.currency.fraction_digits()),
            self.amount,
            self.currency
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rust_decimal_macros::dec;

    fn eur(amount: Decimal) -> Money {
        Money::new(amount, Currency::euro())
    }

    #[test]
    fn test_rounding() {
        assert_eq!(eur(dec!(0.234)).amount(), dec!(0.23));
        assert_eq!(eur(dec!(0.235)).amount(), dec!(0.24));
        assert_eq!(eur(dec!(0.245)).amount(), dec!(0.24));
        assert_eq!(
            Money::with_rounding(
                dec!(0.245),
                Currency::euro(),
                RoundingStrategy::MidpointAwayFromZero
            )
            .amount(),
            dec!(0.25)
        );
        assert_eq!(Money::new(dec!(12.5), Currency::jpy()).amount(), dec!(12));
        assert_eq!(eur(dec!(1)), eur(dec!(1.00)));
    }

    #[test]
    fn test_predicates() {
        assert!(Money::zero(Currency::euro()).is_zero());
        assert!(eur(dec!(0.001)).is_zero());
        assert!(eur(dec!(3)).is_positive());
        assert!(eur(dec!(-3)).is_negative());
        assert!(!Money::zero(Currency::usd()).is_positive());
        assert_eq!(eur(dec!(-3)).abs(), eur(dec!(3)));
        assert_eq!(eur(dec!(3)).negated(), eur(dec!(-3)));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eur(dec!(1.10)).plus(&eur(dec!(2.25))), Ok(eur(dec!(3.35))));
        assert_eq!(
            eur(dec!(1.10)).minus(&eur(dec!(2.25))),
            Ok(eur(dec!(-1.15)))
        );
        assert_eq!(
            eur(dec!(1)).plus(&Money::new(dec!(1), Currency::usd())),
            Err(Error::CurrencyMismatch {
                left: "EUR".to_string(),
                right: "USD".to_string(),
            })
        );
        assert_eq!(eur(dec!(10)).times(dec!(0.333)), Ok(eur(dec!(3.33))));
        assert_eq!(
            eur(dec!(10)).divided_by(dec!(3), RoundingStrategy::ToZero),
            Ok(eur(dec!(3.33)))
        );
        assert_eq!(
            eur(dec!(10)).divided_by(dec!(0), RoundingStrategy::ToZero),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            eur(dec!(10)).ratio_to(&eur(dec!(4))),
            Ratio::of(dec!(5), dec!(2))
        );
    }

    #[test]
    fn test_sum() {
        let values = [eur(dec!(1.10)), eur(dec!(2.25)), eur(dec!(-0.35))];
        assert_eq!(Money::sum(&values, Currency::euro()), Ok(eur(dec!(3))));
        assert_eq!(
            Money::sum(&[], Currency::usd()),
            Ok(Money::zero(Currency::usd()))
        );
        assert!(matches!(
            Money::sum(&values, Currency::usd()),
            Err(Error::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_divided_evenly() {
        assert_eq!(eur(dec!(10)).divided_evenly_into_parts(3), Ok(vec![
            eur(dec!(3.34)),
            eur(dec!(3.33)),
            eur(dec!(3.33))
        ]));
        assert_eq!(eur(dec!(-10)).divided_evenly_into_parts(3), Ok(vec![
            eur(dec!(-3.34)),
            eur(dec!(-3.33)),
            eur(dec!(-3.33))
        ]));
        let yen = Money::new(dec!(100), Currency::jpy());
        let parts = yen.divided_evenly_into_parts(6).unwrap();
        assert_eq!(parts.len(), 6);
        assert_eq!(Money::sum(&parts, Currency::jpy()), Ok(yen));
        assert_eq!(
            eur(dec!(1)).divided_evenly_into_parts(0),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_deserialize_rounds() {
        let m: Money = serde_json::from_str(
            r#"{"amount":"0.125","currency":{"code":"EUR","symbol":"€",
                "symbol_after":true,"fraction_digits":2}}"#,
        )
        .unwrap();
        assert_eq!(m, eur(dec!(0.12)));
        let parts = m.divided_evenly_into_parts(2).unwrap();
        assert_eq!(Money::sum(&parts, Currency::euro()), Ok(m));

        let shown = serde_json::to_string(&eur(dec!(3.5))).unwrap();
        let back: Money = serde_json::from_str(&shown).unwrap();
        assert_eq!(back, eur(dec!(3.5)));
    }

    #[test]
    fn test_compare() {
        assert!(eur(dec!(1)) < eur(dec!(2)));
        assert_eq!(
            eur(dec!(1)).partial_cmp(&Money::new(dec!(1), Currency::usd())),
            None
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(eur(dec!(10)).to_string(), "10.00 EUR");
        assert_eq!(eur(dec!(-0.5)).to_string(), "-0.50 EUR");
        assert_eq!(
            Money::new(dec!(1234), Currency::jpy()).to_string(),
            "1234 JPY"
        );
    }
}

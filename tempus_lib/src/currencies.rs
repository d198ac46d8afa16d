use serde::{Deserialize, Serialize};

/// A currency in which money amounts are expressed.
///
/// Amounts in a currency are always rounded to its number of fraction
/// digits, for instance 2 for euros (cents) and 0 for yens.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, like "EUR"
    code: String,

    // Symbol to display the currency, e.g. the euro sign, and whether to
    // display it before or after the amount.
    symbol: String,
    symbol_after: bool,

    fraction_digits: u8,
}

impl Currency {
    pub fn new(
        code: &str,
        symbol: &str,
        symbol_after: bool,
        fraction_digits: u8,
    ) -> Self {
        Currency {
            code: code.trim().to_string(),
            symbol: symbol.trim().to_string(),
            symbol_after,
            fraction_digits,
        }
    }

    pub fn euro() -> Self {
        Currency::new("EUR", "€", true, 2)
    }

    pub fn usd() -> Self {
        Currency::new("USD", "$", false, 2)
    }

    pub fn jpy() -> Self {
        Currency::new("JPY", "¥", false, 0)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn symbol_after(&self) -> bool {
        self.symbol_after
    }

    /// Number of digits in the fractional part
    pub fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

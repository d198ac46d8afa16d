use crate::currencies::Currency;
use crate::money::Money;
use rust_decimal::{Decimal, RoundingStrategy};

/// How to display currencies
#[derive(Clone, Copy, Default)]
pub enum SymbolQuote {
    #[default]
    UnquotedSymbol, // e.g. $   Will be displayed before or after the value
    UnquotedCode,          // The ISO code of the currency (e.g. USD)
    QuotedCodeIfSpecial,   //  only if it contains spaces, starts with digit,...
    QuotedCodeAlways,      // e.g.  "USD"
    QuotedSymbolIfSpecial, //  only if it contains spaces, starts with digit,...
    QuotedSymbolAlways,    // e.g.  "$"
}

/// How to display negative values
#[derive(Clone, Copy, Default)]
pub enum Negative {
    #[default]
    MinusSign, // USD -123
    Parenthesis,  // USD (123)
    SeparateSign, // -USD 123
}

/// How to display large numbers
#[derive(Clone, Copy)]
pub enum Separators {
    None,              // no special formatting    1234456.789
    Every3Digit(char), // char every 3 digits      1,234,456.789
}
impl Default for Separators {
    fn default() -> Self {
        Separators::Every3Digit(',')
    }
}

/// How to display zero values
#[derive(Clone, Copy)]
pub enum Zero {
    Empty,                 // display nothing
    Replace(&'static str), // display a specific text instead (e.g. "-")
}

pub struct Formatter {
    pub quote_symbol: SymbolQuote,
    pub hide_symbol_if: Option<Currency>,
    pub negative: Negative,
    pub separators: Separators,
    pub comma: char,
    pub zero: Zero,
    pub negate: bool, // display opposite sign
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            comma: '.',
            quote_symbol: SymbolQuote::default(),
            hide_symbol_if: None,
            negative: Negative::default(),
            separators: Separators::default(),
            zero: Zero::Empty,
            negate: false,
        }
    }
}

impl Formatter {
    /// Display the absolute value of value
    fn push_abs_num(&self, into: &mut String, value: Decimal, precision: u8) {
        let rounded = value.abs().round_dp_with_strategy(
            u32::from(precision),
            RoundingStrategy::MidpointNearestEven,
        );
        let text = format!("{:.*}", usize::from(precision), rounded);
        let (int_part, frac_part) =
            text.split_once('.').unwrap_or((text.as_str(), ""));

        match self.separators {
            Separators::None => into.push_str(int_part),
            Separators::Every3Digit(sep) => {
                let len = int_part.chars().count();
                for (idx, p) in int_part.chars().enumerate() {
                    if idx > 0 && (len - idx) % 3 == 0 {
                        into.push(sep);
                    }
                    into.push(p);
                }
            }
        }

        if !frac_part.is_empty() {
            into.push(self.comma);
            into.push_str(frac_part);
        }
    }

    fn push_quoted(into: &mut String, text: &str, always: bool) {
        if always || !text.chars().all(|c| c.is_alphanumeric()) {
            into.push('"');
            into.push_str(text);
            into.push('"');
        } else {
            into.push_str(text);
        }
    }

    fn push_currency(&self, into: &mut String, currency: &Currency) {
        match self.quote_symbol {
            SymbolQuote::UnquotedSymbol => into.push_str(currency.symbol()),
            SymbolQuote::UnquotedCode => into.push_str(currency.code()),
            SymbolQuote::QuotedSymbolIfSpecial => {
                Self::push_quoted(into, currency.symbol(), false);
            }
            SymbolQuote::QuotedSymbolAlways => {
                Self::push_quoted(into, currency.symbol(), true);
            }
            SymbolQuote::QuotedCodeIfSpecial => {
                Self::push_quoted(into, currency.code(), false);
            }
            SymbolQuote::QuotedCodeAlways => {
                Self::push_quoted(into, currency.code(), true);
            }
        }
    }

    pub fn display_symbol(&self, currency: &Currency) -> String {
        let mut buffer = String::new();
        self.push_currency(&mut buffer, currency);
        buffer
    }

    pub fn display(&self, money: &Money) -> String {
        let mut buffer = String::new();
        self.push(&mut buffer, money);
        buffer
    }

    pub fn push_zero(&self, into: &mut String) {
        match self.zero {
            Zero::Empty => {}
            Zero::Replace(z) => into.push_str(z),
        }
    }

    pub fn push(&self, into: &mut String, money: &Money) {
        if money.is_zero() {
            self.push_zero(into);
            return;
        }

        let value = if self.negate {
            -money.amount()
        } else {
            money.amount()
        };
        let currency = money.currency();
        let precision = currency.fraction_digits();

        if self.hide_symbol_if.as_ref() == Some(currency) {
            if value.is_sign_negative() {
                into.push('-');
            }
            self.push_abs_num(into, value, precision);
            return;
        }

        if !currency.symbol_after() {
            if value.is_sign_negative() {
                match self.negative {
                    Negative::SeparateSign => {
                        into.push('-');
                        self.push_currency(into, currency);
                        into.push(' ');
                        self.push_abs_num(into, value, precision);
                    }
                    Negative::MinusSign => {
                        self.push_currency(into, currency);
                        into.push(' ');
                        into.push('-');
                        self.push_abs_num(into, value, precision);
                    }
                    Negative::Parenthesis => {
                        self.push_currency(into, currency);
                        into.push(' ');
                        into.push('(');
                        self.push_abs_num(into, value, precision);
                        into.push(')');
                    }
                }
            } else {
                self.push_currency(into, currency);
                into.push(' ');
                self.push_abs_num(into, value, precision);
            }
        } else if value.is_sign_negative() {
            match self.negative {
                Negative::SeparateSign | Negative::MinusSign => {
                    into.push('-');
                    self.push_abs_num(into, value, precision);
                }
                Negative::Parenthesis => {
                    into.push('(');
                    self.push_abs_num(into, value, precision);
                    into.push(')');
                }
            }
            into.push(' ');
            self.push_currency(into, currency);
        } else {
            self.push_abs_num(into, value, precision);
            into.push(' ');
            self.push_currency(into, currency);
        }
    }
}

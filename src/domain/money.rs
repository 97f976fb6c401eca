use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A positive, finite, currency-agnostic magnitude.
///
/// The only ways to build one are [`parse_amount`], [`Amount::new`] and
/// deserialization, and all three reject zero, negative, NaN and infinite values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, ParseAmountError> {
        if !value.is_finite() {
            return Err(ParseAmountError::NotFinite);
        }
        if value <= 0.0 {
            return Err(ParseAmountError::NotPositive);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Amount::new(value).map_err(serde::de::Error::custom)
    }
}

/// Parse user-typed amount text.
/// Example: "50" -> 50.0, " 12.5 " -> 12.5, "99,90" -> 99.9
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    // Comma decimal separator, as typed on ru-RU keyboards
    let normalized = if input.contains(',') && !input.contains('.') {
        input.replacen(',', ".", 1)
    } else {
        input.to_string()
    };

    let value: f64 = normalized
        .parse()
        .map_err(|_| ParseAmountError::NotANumber(input.to_string()))?;
    Amount::new(value)
}

/// Format an amount with an explicit sign for credit/debit display.
/// Example: (50.0, true) -> "+50", (12.5, false) -> "-12.5"
pub fn format_signed(amount: Amount, credit: bool) -> String {
    let sign = if credit { '+' } else { '-' };
    format!("{}{}", sign, amount)
}

/// Format a signed total to two decimals. Example: -1234.5 -> "-1234.50"
pub fn format_total(total: f64) -> String {
    format!("{:.2}", total)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    NotANumber(String),
    NotFinite,
    NotPositive,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::NotANumber(s) => write!(f, "'{}' is not a number", s),
            ParseAmountError::NotFinite => write!(f, "amount must be finite"),
            ParseAmountError::NotPositive => write!(f, "amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

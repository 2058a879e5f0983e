//! Monetary input handling.
//!
//! Salaries and gross amounts reach the service either as JSON numbers or as
//! numeric-looking strings. [`AmountInput`] keeps the raw value until it is
//! coerced into a [`Decimal`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept for currency values.
pub const CURRENCY_SCALE: u32 = 2;

/// A monetary value as supplied by a caller, before coercion.
///
/// # Example
///
/// ```
/// use employee_payroll::models::AmountInput;
/// use rust_decimal::Decimal;
///
/// let input: AmountInput = serde_json::from_str("\"333.33\"").unwrap();
/// assert_eq!(input.to_decimal(), Some(Decimal::new(33333, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number.
    Number(serde_json::Number),
    /// A string that may or may not hold a number.
    Text(String),
}

impl AmountInput {
    /// Returns true if the input carries no characters worth parsing.
    pub fn is_blank(&self) -> bool {
        match self {
            AmountInput::Number(_) => false,
            AmountInput::Text(text) => text.trim().is_empty(),
        }
    }

    /// Coerces the input into a decimal, or `None` if it is not numeric.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            AmountInput::Number(number) => parse_decimal(&number.to_string()),
            AmountInput::Text(text) => parse_decimal(text.trim()),
        }
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<i64> for AmountInput {
    fn from(value: i64) -> Self {
        AmountInput::Number(value.into())
    }
}

impl From<i32> for AmountInput {
    fn from(value: i32) -> Self {
        AmountInput::Number(value.into())
    }
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountInput::Number(number) => write!(f, "{}", number),
            AmountInput::Text(text) => write!(f, "{}", text),
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Rounds a currency value to two places, midpoint away from zero.
///
/// # Example
///
/// ```
/// use employee_payroll::models::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(33333, 3)), Decimal::new(3333, 2));
/// assert_eq!(round_currency(Decimal::new(1005, 3)), Decimal::new(101, 2));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_number_input_coerces() {
        let input: AmountInput = serde_json::from_str("1000").unwrap();
        assert_eq!(input.to_decimal(), Some(dec("1000")));

        let input: AmountInput = serde_json::from_str("333.33").unwrap();
        assert_eq!(input.to_decimal(), Some(dec("333.33")));
    }

    #[test]
    fn test_numeric_string_coerces() {
        let input: AmountInput = serde_json::from_str("\" 1500.5 \"").unwrap();
        assert_eq!(input.to_decimal(), Some(dec("1500.5")));
    }

    #[test]
    fn test_scientific_notation_coerces() {
        let input = AmountInput::from("1e3");
        assert_eq!(input.to_decimal(), Some(dec("1000")));
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        assert_eq!(AmountInput::from("abc").to_decimal(), None);
        assert_eq!(AmountInput::from("12abc").to_decimal(), None);
    }

    #[test]
    fn test_blank_detection() {
        assert!(AmountInput::from("   ").is_blank());
        assert!(!AmountInput::from("0").is_blank());
        assert!(!AmountInput::from(0).is_blank());
        assert_eq!(AmountInput::from("").to_decimal(), None);
    }

    #[test]
    fn test_negative_values_coerce() {
        assert_eq!(AmountInput::from(-100).to_decimal(), Some(dec("-100")));
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec("0.125")), dec("0.13"));
        assert_eq!(round_currency(dec("0.124")), dec("0.12"));
        assert_eq!(round_currency(dec("-0.125")), dec("-0.13"));
    }

    #[test]
    fn test_round_currency_sets_scale() {
        assert_eq!(round_currency(dec("60000")).to_string(), "60000.00");
        assert_eq!(round_currency(dec("300.000")).to_string(), "300.00");
    }
}

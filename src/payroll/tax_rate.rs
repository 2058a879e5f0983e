//! TDS rate lookup.
//!
//! Two flat brackets exist: India at 10% and the United States at 12%.
//! Every other country, including unrecognized or empty values, is untaxed.

use rust_decimal::Decimal;

use crate::models::match_key;

/// The flat tax bracket a country falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxBracket {
    /// India, 10%.
    India,
    /// United States under any accepted alias, 12%.
    UnitedStates,
    /// Any other country, 0%.
    Untaxed,
}

impl TaxBracket {
    /// Resolves a free-form country name to its bracket.
    ///
    /// The name is trimmed and lowercased before an exact lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::payroll::TaxBracket;
    ///
    /// assert_eq!(TaxBracket::for_country(" INDIA "), TaxBracket::India);
    /// assert_eq!(TaxBracket::for_country("unitedstates"), TaxBracket::UnitedStates);
    /// assert_eq!(TaxBracket::for_country("Indiana"), TaxBracket::Untaxed);
    /// ```
    pub fn for_country(country: &str) -> Self {
        match match_key(country).as_str() {
            "india" => TaxBracket::India,
            "united states" | "usa" | "us" | "unitedstates" => TaxBracket::UnitedStates,
            _ => TaxBracket::Untaxed,
        }
    }

    /// Returns the flat rate for this bracket.
    pub fn rate(self) -> Decimal {
        match self {
            TaxBracket::India => Decimal::new(10, 2),
            TaxBracket::UnitedStates => Decimal::new(12, 2),
            TaxBracket::Untaxed => Decimal::ZERO,
        }
    }
}

/// Returns the TDS rate that applies to `country`.
pub fn tds_rate_for_country(country: &str) -> Decimal {
    TaxBracket::for_country(country).rate()
}

//! Deduction calculation.
//!
//! `tax = round(gross * rate, 2)` and `net = round(gross - tax, 2)`, both
//! rounding midpoints away from zero. Gross amounts are not validated here:
//! zero or negative figures produce mechanically consistent results.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AmountInput, Deductions, round_currency};

use super::tax_rate::tds_rate_for_country;

/// Computes tax and net salary for `gross_salary` under the bracket of `country`.
///
/// The country is echoed back exactly as supplied.
///
/// # Examples
///
/// ```
/// use employee_payroll::payroll::calculate_deductions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_deductions("India", Decimal::from_str("333.33").unwrap());
/// assert_eq!(result.tax, Decimal::from_str("33.33").unwrap());
/// assert_eq!(result.net_salary, Decimal::from_str("300.00").unwrap());
/// ```
pub fn calculate_deductions(country: &str, gross_salary: Decimal) -> Deductions {
    let tax_rate = tds_rate_for_country(country);
    let tax = round_currency(gross_salary * tax_rate);
    let net_salary = round_currency(gross_salary - tax);

    Deductions {
        employee_id: None,
        country: country.to_string(),
        gross_salary,
        tax_rate,
        tax,
        net_salary,
    }
}

/// Coerces a caller-supplied gross salary into a decimal.
///
/// Returns `InvalidInput` when the value is not numeric.
pub fn parse_gross_salary(input: &AmountInput) -> PayrollResult<Decimal> {
    input.to_decimal().ok_or_else(|| PayrollError::InvalidInput {
        field: "gross_salary".to_string(),
        message: format!("'{}' is not a number", input),
    })
}

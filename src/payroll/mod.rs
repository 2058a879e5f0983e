//! Payroll calculation for the employee payroll service.
//!
//! This module contains the TDS rate lookup by country and the deduction
//! calculation that turns a gross salary into tax and net salary.

mod deductions;
mod tax_rate;

pub use deductions::{calculate_deductions, parse_gross_salary};
pub use tax_rate::{TaxBracket, tds_rate_for_country};

//! Deduction result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a TDS calculation for one gross salary figure.
///
/// Amounts are serialized as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    /// The employee whose country was used, when resolved through the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u64>,
    /// The country exactly as supplied.
    pub country: String,
    /// The gross salary the calculation started from.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_salary: Decimal,
    /// The flat rate applied (e.g., 0.10).
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_rate: Decimal,
    /// Tax deducted, rounded to two places.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    /// Gross minus tax, rounded to two places.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,
}

impl Deductions {
    /// Attaches the employee id the country was resolved from.
    pub fn for_employee(mut self, employee_id: u64) -> Self {
        self.employee_id = Some(employee_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_amounts_as_numbers() {
        let deductions = Deductions {
            employee_id: None,
            country: "India".to_string(),
            gross_salary: Decimal::new(1000, 0),
            tax_rate: Decimal::new(10, 2),
            tax: Decimal::new(10000, 2),
            net_salary: Decimal::new(90000, 2),
        };

        let json = serde_json::to_value(&deductions).unwrap();
        assert_eq!(json["tax"].as_f64(), Some(100.0));
        assert_eq!(json["net_salary"].as_f64(), Some(900.0));
        assert_eq!(json["tax_rate"].as_f64(), Some(0.1));
        assert!(json.get("employee_id").is_none());
    }

    #[test]
    fn test_for_employee_sets_id() {
        let deductions = Deductions {
            employee_id: None,
            country: "Canada".to_string(),
            gross_salary: Decimal::new(500, 0),
            tax_rate: Decimal::ZERO,
            tax: Decimal::ZERO,
            net_salary: Decimal::new(500, 0),
        }
        .for_employee(9);

        let json = serde_json::to_value(&deductions).unwrap();
        assert_eq!(json["employee_id"], 9);
    }
}

//! Employee model and field validation.
//!
//! This module defines the stored [`Employee`] record, the caller-supplied
//! [`EmployeeFields`] used for both create and update, and the validated
//! [`EmployeeDraft`] that the repositories persist.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::{AmountInput, round_currency};

/// Largest storable salary: ten significant digits at two decimal places.
pub const MAX_SALARY: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Represents one payroll record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// System-assigned identifier, never reused.
    pub id: u64,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Free-form job title (e.g., "Developer").
    pub job_title: String,
    /// Free-form country name (e.g., "India").
    pub country: String,
    /// Salary at two decimal places, always greater than zero.
    #[serde(with = "rust_decimal::serde::str")]
    pub salary: Decimal,
    /// When the record was first persisted.
    pub created_at: DateTime<Utc>,
    /// When the record was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Builds a stored record from a validated draft.
    pub fn from_draft(id: u64, draft: EmployeeDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            job_title: draft.job_title,
            country: draft.country,
            salary: draft.salary,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the first and last name separated by a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::models::{Employee, EmployeeDraft};
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let draft = EmployeeDraft {
    ///     first_name: "John".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     job_title: "Developer".to_string(),
    ///     country: "India".to_string(),
    ///     salary: Decimal::new(100000, 2),
    /// };
    /// let employee = Employee::from_draft(1, draft, Utc::now());
    /// assert_eq!(employee.full_name(), "John Doe");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrites the business fields with those of `draft`, keeping id and creation time.
    pub fn apply(&mut self, draft: EmployeeDraft, now: DateTime<Utc>) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.job_title = draft.job_title;
        self.country = draft.country;
        self.salary = draft.salary;
        self.updated_at = now;
    }
}

/// The five business fields of an employee after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Free-form job title.
    pub job_title: String,
    /// Free-form country name.
    pub country: String,
    /// Salary rounded to two decimal places.
    pub salary: Decimal,
}

/// Employee fields as supplied by a caller.
///
/// Every field is optional: a create request must supply all of them, while an
/// update supplies only the ones that change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    /// The employee's first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// The employee's last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Free-form job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Free-form country name.
    #[serde(default)]
    pub country: Option<String>,
    /// Salary as a number or numeric string.
    #[serde(default)]
    pub salary: Option<AmountInput>,
}

impl EmployeeFields {
    /// Fills every field this value leaves unset from `existing`.
    pub fn merged_over(self, existing: &Employee) -> EmployeeFields {
        EmployeeFields {
            first_name: self
                .first_name
                .or_else(|| Some(existing.first_name.clone())),
            last_name: self.last_name.or_else(|| Some(existing.last_name.clone())),
            job_title: self.job_title.or_else(|| Some(existing.job_title.clone())),
            country: self.country.or_else(|| Some(existing.country.clone())),
            salary: self.salary.or_else(|| Some(existing.salary.into())),
        }
    }

    /// Checks every field rule and returns the draft, or one message per violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::models::EmployeeFields;
    ///
    /// let fields = EmployeeFields {
    ///     first_name: Some("John".to_string()),
    ///     salary: Some((-1).into()),
    ///     ..Default::default()
    /// };
    /// let errors = fields.validate().unwrap_err();
    /// assert_eq!(errors, vec![
    ///     "Last name can't be blank",
    ///     "Job title can't be blank",
    ///     "Country can't be blank",
    ///     "Salary must be greater than 0",
    /// ]);
    /// ```
    pub fn validate(&self) -> Result<EmployeeDraft, Vec<String>> {
        let mut errors = Vec::new();

        let first_name = require_text(&self.first_name, "First name", &mut errors);
        let last_name = require_text(&self.last_name, "Last name", &mut errors);
        let job_title = require_text(&self.job_title, "Job title", &mut errors);
        let country = require_text(&self.country, "Country", &mut errors);
        let salary = require_salary(&self.salary, &mut errors);

        match (first_name, last_name, job_title, country, salary) {
            (Some(first_name), Some(last_name), Some(job_title), Some(country), Some(salary))
                if errors.is_empty() =>
            {
                Ok(EmployeeDraft {
                    first_name,
                    last_name,
                    job_title,
                    country,
                    salary,
                })
            }
            _ => Err(errors),
        }
    }
}

fn require_text(value: &Option<String>, label: &str, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => {
            errors.push(format!("{} can't be blank", label));
            None
        }
    }
}

// Salary is checked after rounding so a stored record can never round down to zero.
fn require_salary(value: &Option<AmountInput>, errors: &mut Vec<String>) -> Option<Decimal> {
    let input = match value {
        Some(input) if !input.is_blank() => input,
        _ => {
            errors.push("Salary can't be blank".to_string());
            return None;
        }
    };

    let Some(amount) = input.to_decimal() else {
        errors.push("Salary is not a number".to_string());
        return None;
    };

    let salary = round_currency(amount);
    if salary <= Decimal::ZERO {
        errors.push("Salary must be greater than 0".to_string());
        return None;
    }
    if salary > MAX_SALARY {
        errors.push("Salary must be less than 100000000".to_string());
        return None;
    }
    Some(salary)
}

/// Normalizes a text value for case-insensitive matching.
pub fn match_key(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_fields() -> EmployeeFields {
        EmployeeFields {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            job_title: Some("Developer".to_string()),
            country: Some("USA".to_string()),
            salary: Some(60000.into()),
        }
    }

    fn stored_employee() -> Employee {
        let draft = valid_fields().validate().unwrap();
        Employee::from_draft(1, draft, Utc::now())
    }

    #[test]
    fn test_valid_fields_produce_draft() {
        let draft = valid_fields().validate().unwrap();
        assert_eq!(draft.first_name, "John");
        assert_eq!(draft.country, "USA");
        assert_eq!(draft.salary, dec("60000"));
        assert_eq!(draft.salary.to_string(), "60000.00");
    }

    #[test]
    fn test_all_blank_fields_report_every_violation() {
        let fields = EmployeeFields {
            first_name: Some(String::new()),
            last_name: Some("   ".to_string()),
            job_title: None,
            country: Some(String::new()),
            salary: Some((-1).into()),
        };

        let errors = fields.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "First name can't be blank",
                "Last name can't be blank",
                "Job title can't be blank",
                "Country can't be blank",
                "Salary must be greater than 0",
            ]
        );
    }

    #[test]
    fn test_missing_salary_is_blank() {
        let mut fields = valid_fields();
        fields.salary = None;
        assert_eq!(fields.validate().unwrap_err(), vec!["Salary can't be blank"]);

        fields.salary = Some(AmountInput::from(""));
        assert_eq!(fields.validate().unwrap_err(), vec!["Salary can't be blank"]);
    }

    #[test]
    fn test_zero_salary_rejected() {
        let mut fields = valid_fields();
        fields.salary = Some(0.into());
        assert_eq!(
            fields.validate().unwrap_err(),
            vec!["Salary must be greater than 0"]
        );
    }

    #[test]
    fn test_salary_rounding_to_zero_rejected() {
        let mut fields = valid_fields();
        fields.salary = Some(AmountInput::from("0.004"));
        assert_eq!(
            fields.validate().unwrap_err(),
            vec!["Salary must be greater than 0"]
        );
    }

    #[test]
    fn test_salary_ceiling_accepted_at_scale_two() {
        let mut fields = valid_fields();
        fields.salary = Some(AmountInput::from("99999999.99"));

        let salary = fields.validate().unwrap().salary;
        assert_eq!(salary, MAX_SALARY);
        assert_eq!(salary.scale(), 2);
        assert_eq!(salary.to_string(), "99999999.99");
    }

    #[test]
    fn test_salary_above_ceiling_rejected() {
        for value in ["100000000", "99999999.995", "50000000000000000000000000000"] {
            let mut fields = valid_fields();
            fields.salary = Some(AmountInput::from(value));
            assert_eq!(
                fields.validate().unwrap_err(),
                vec!["Salary must be less than 100000000"],
                "value {value}"
            );
        }
    }

    #[test]
    fn test_non_numeric_salary_rejected() {
        let mut fields = valid_fields();
        fields.salary = Some(AmountInput::from("lots"));
        assert_eq!(
            fields.validate().unwrap_err(),
            vec!["Salary is not a number"]
        );
    }

    #[test]
    fn test_numeric_string_salary_accepted_and_rounded() {
        let mut fields = valid_fields();
        fields.salary = Some(AmountInput::from("1234.567"));
        assert_eq!(fields.validate().unwrap().salary, dec("1234.57"));
    }

    #[test]
    fn test_empty_update_merges_to_existing_values() {
        let employee = stored_employee();
        let merged = EmployeeFields::default().merged_over(&employee);
        let draft = merged.validate().unwrap();

        assert_eq!(draft.first_name, employee.first_name);
        assert_eq!(draft.last_name, employee.last_name);
        assert_eq!(draft.job_title, employee.job_title);
        assert_eq!(draft.country, employee.country);
        assert_eq!(draft.salary, employee.salary);
    }

    #[test]
    fn test_partial_update_overrides_supplied_fields_only() {
        let employee = stored_employee();
        let changes = EmployeeFields {
            job_title: Some("Senior Developer".to_string()),
            ..Default::default()
        };

        let draft = changes.merged_over(&employee).validate().unwrap();
        assert_eq!(draft.job_title, "Senior Developer");
        assert_eq!(draft.first_name, "John");
    }

    #[test]
    fn test_apply_keeps_id_and_created_at() {
        let mut employee = stored_employee();
        let created_at = employee.created_at;
        let later = created_at + chrono::Duration::seconds(5);

        let mut draft = valid_fields().validate().unwrap();
        draft.country = "India".to_string();
        employee.apply(draft, later);

        assert_eq!(employee.id, 1);
        assert_eq!(employee.country, "India");
        assert_eq!(employee.created_at, created_at);
        assert_eq!(employee.updated_at, later);
    }

    #[test]
    fn test_deserialize_fields_with_string_salary() {
        let json = r#"{
            "first_name": "Asha",
            "last_name": "Rao",
            "job_title": "Analyst",
            "country": "India",
            "salary": "45000.50"
        }"#;

        let fields: EmployeeFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.validate().unwrap().salary, dec("45000.50"));
    }

    #[test]
    fn test_deserialize_partial_fields() {
        let fields: EmployeeFields = serde_json::from_str(r#"{"salary": -100}"#).unwrap();
        assert!(fields.first_name.is_none());
        assert_eq!(fields.salary, Some((-100).into()));
    }

    #[test]
    fn test_serialize_employee_salary_as_string() {
        let employee = stored_employee();
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["salary"], "60000.00");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_match_key_trims_and_lowercases() {
        assert_eq!(match_key("  India "), "india");
        assert_eq!(match_key("UNITED States"), "united states");
    }
}

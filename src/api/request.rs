//! Request types for the employee payroll API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! employee endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{AmountInput, EmployeeFields};

/// Body for `POST /employees` and `PUT|PATCH /employees/:id`.
///
/// The employee attributes are nested under an `employee` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The supplied employee attributes.
    pub employee: EmployeeFields,
}

/// Body for `POST /employees/:id/deductions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeductionsRequest {
    /// Gross salary to deduct from, as a number or numeric string.
    #[serde(default)]
    pub gross_salary: Option<AmountInput>,
}

/// Query string accepted by `POST /employees/:id/deductions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeductionsQuery {
    /// Gross salary supplied as a query parameter.
    pub gross_salary: Option<String>,
}

/// Query string for `GET /employees/salary_metrics_by_country`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryQuery {
    /// Country to report on.
    pub country: Option<String>,
}

/// Query string for `GET /employees/salary_metrics_by_job_title`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobTitleQuery {
    /// Job title to report on.
    pub job_title: Option<String>,
}

/// Returns the value if it is present and not just whitespace.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

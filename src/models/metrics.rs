//! Salary report models.
//!
//! [`SalarySummary`] is what a repository computes over a filtered subset;
//! [`CountrySalaryMetrics`] and [`JobTitleSalaryMetrics`] are the shapes
//! returned to callers.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Minimum, maximum and average salary over a set of employees.
///
/// All three values are `None` when the set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalarySummary {
    /// Number of salaries folded into the summary.
    pub count: usize,
    /// Lowest salary seen.
    pub minimum: Option<Decimal>,
    /// Highest salary seen.
    pub maximum: Option<Decimal>,
    /// Arithmetic mean, unrounded.
    pub average: Option<Decimal>,
}

impl SalarySummary {
    /// Folds an iterator of salaries into a summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::models::SalarySummary;
    /// use rust_decimal::Decimal;
    ///
    /// let summary = SalarySummary::from_salaries(
    ///     [Decimal::from(1000), Decimal::from(2000), Decimal::from(3000)],
    /// );
    /// assert_eq!(summary.average, Some(Decimal::from(2000)));
    ///
    /// let empty = SalarySummary::from_salaries(Vec::<Decimal>::new());
    /// assert_eq!(empty.average, None);
    /// ```
    pub fn from_salaries<I>(salaries: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let salaries: Vec<Decimal> = salaries.into_iter().collect();
        let count = salaries.len();
        let minimum = salaries.iter().copied().min();
        let maximum = salaries.iter().copied().max();
        let average = (count > 0).then(|| mean(&salaries));

        Self {
            count,
            minimum,
            maximum,
            average,
        }
    }
}

/// Mean of a non-empty slice that never overflows.
///
/// Falls back to summing per-item shares when the plain total does not fit.
fn mean(values: &[Decimal]) -> Decimal {
    let n = Decimal::from(values.len());
    match values
        .iter()
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(*value))
    {
        Some(total) => total / n,
        None => values
            .iter()
            .fold(Decimal::ZERO, |acc, value| acc.saturating_add(*value / n)),
    }
}

fn as_float(value: Option<Decimal>) -> Option<f64> {
    value.and_then(|v| v.to_f64())
}

/// Salary statistics for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySalaryMetrics {
    /// The country exactly as the caller supplied it.
    pub country: String,
    /// Lowest salary, or `null` when no employee matches.
    pub minimum_salary: Option<f64>,
    /// Highest salary, or `null` when no employee matches.
    pub maximum_salary: Option<f64>,
    /// Mean salary, or `null` when no employee matches.
    pub average_salary: Option<f64>,
}

impl CountrySalaryMetrics {
    /// Builds the report for `country` from a computed summary.
    pub fn new(country: impl Into<String>, summary: &SalarySummary) -> Self {
        Self {
            country: country.into(),
            minimum_salary: as_float(summary.minimum),
            maximum_salary: as_float(summary.maximum),
            average_salary: as_float(summary.average),
        }
    }
}

/// Average salary for one job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTitleSalaryMetrics {
    /// The job title exactly as the caller supplied it.
    pub job_title: String,
    /// Mean salary, or `null` when no employee matches.
    pub average_salary: Option<f64>,
}

impl JobTitleSalaryMetrics {
    /// Builds the report for `job_title` from a computed summary.
    pub fn new(job_title: impl Into<String>, summary: &SalarySummary) -> Self {
        Self {
            job_title: job_title.into(),
            average_salary: as_float(summary.average),
        }
    }
}

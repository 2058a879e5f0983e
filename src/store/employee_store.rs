//! The employee store: validated CRUD and salary reports over a repository.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{CountrySalaryMetrics, Employee, EmployeeFields, JobTitleSalaryMetrics};

use super::memory::InMemoryRepository;
use super::repository::{MatchField, RepositoryHandle};

/// Owns the employee collection and enforces its field rules.
///
/// Cloning is cheap; clones share the same repository.
///
/// # Example
///
/// ```
/// use employee_payroll::models::EmployeeFields;
/// use employee_payroll::store::EmployeeStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = EmployeeStore::in_memory();
/// let employee = store
///     .create(EmployeeFields {
///         first_name: Some("John".to_string()),
///         last_name: Some("Doe".to_string()),
///         job_title: Some("Developer".to_string()),
///         country: Some("India".to_string()),
///         salary: Some(1000.into()),
///     })
///     .await
///     .unwrap();
///
/// let metrics = store.salary_metrics_by_country("INDIA").await.unwrap();
/// assert_eq!(metrics.average_salary, Some(1000.0));
/// assert_eq!(store.get(employee.id).await.unwrap(), employee);
/// # });
/// ```
#[derive(Clone)]
pub struct EmployeeStore {
    repository: RepositoryHandle,
}

impl EmployeeStore {
    /// Creates a store over the given repository.
    pub fn new(repository: RepositoryHandle) -> Self {
        Self { repository }
    }

    /// Creates a store over a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }

    /// Returns every employee in insertion order.
    pub async fn list(&self) -> PayrollResult<Vec<Employee>> {
        self.repository.all().await
    }

    /// Returns the employee with `id`, or `NotFound`.
    pub async fn get(&self, id: u64) -> PayrollResult<Employee> {
        self.repository
            .find(id)
            .await?
            .ok_or(PayrollError::NotFound { id })
    }

    /// Validates a full field set and persists it as a new employee.
    ///
    /// Nothing is written when validation fails.
    pub async fn create(&self, fields: EmployeeFields) -> PayrollResult<Employee> {
        let draft = fields
            .validate()
            .map_err(|errors| PayrollError::ValidationFailed { errors })?;

        let employee = self.repository.insert(draft).await?;
        info!(
            employee_id = employee.id,
            name = %employee.full_name(),
            "Employee created"
        );
        Ok(employee)
    }

    /// Merges `changes` over the stored employee, re-validates, and persists.
    ///
    /// Fields left unset in `changes` keep their stored values. The stored
    /// record is unchanged when validation fails.
    pub async fn update(&self, id: u64, changes: EmployeeFields) -> PayrollResult<Employee> {
        let mut employee = self.get(id).await?;

        let draft = changes
            .merged_over(&employee)
            .validate()
            .map_err(|errors| PayrollError::ValidationFailed { errors })?;

        employee.apply(draft, Utc::now());
        if !self.repository.replace(employee.clone()).await? {
            return Err(PayrollError::NotFound { id });
        }

        info!(employee_id = id, "Employee updated");
        Ok(employee)
    }

    /// Removes the employee with `id`, or `NotFound` if there is none.
    pub async fn delete(&self, id: u64) -> PayrollResult<()> {
        if !self.repository.remove(id).await? {
            return Err(PayrollError::NotFound { id });
        }
        info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    /// Minimum, maximum and average salary for employees in `country`.
    ///
    /// Matching ignores case and surrounding whitespace; the report echoes
    /// `country` as given. An empty match yields `null` statistics.
    pub async fn salary_metrics_by_country(
        &self,
        country: &str,
    ) -> PayrollResult<CountrySalaryMetrics> {
        let summary = self
            .repository
            .salary_summary(MatchField::Country, country)
            .await?;
        debug!(country, matched = summary.count, "Computed country salary metrics");
        Ok(CountrySalaryMetrics::new(country, &summary))
    }

    /// Average salary for employees holding `job_title`.
    pub async fn salary_metrics_by_job_title(
        &self,
        job_title: &str,
    ) -> PayrollResult<JobTitleSalaryMetrics> {
        let summary = self
            .repository
            .salary_summary(MatchField::JobTitle, job_title)
            .await?;
        debug!(job_title, matched = summary.count, "Computed job title salary metrics");
        Ok(JobTitleSalaryMetrics::new(job_title, &summary))
    }
}

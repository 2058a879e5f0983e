//! Storage port for employee records.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeDraft, SalarySummary, match_key};

/// The text column a salary summary is filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    /// Filter on `country`.
    Country,
    /// Filter on `job_title`.
    JobTitle,
}

impl MatchField {
    /// Returns true if `employee` matches an already-normalized `key`.
    pub fn matches(self, employee: &Employee, key: &str) -> bool {
        let value = match self {
            MatchField::Country => &employee.country,
            MatchField::JobTitle => &employee.job_title,
        };
        match_key(value) == key
    }
}

/// Persisted collection of employee records.
///
/// Each method is one read-modify-write against the backing collection.
/// Implementations assign ids on insert and never reuse them.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persists a validated draft and returns it with its assigned id.
    async fn insert(&self, draft: EmployeeDraft) -> PayrollResult<Employee>;

    /// Looks up a record by id.
    async fn find(&self, id: u64) -> PayrollResult<Option<Employee>>;

    /// Overwrites an existing record. Returns false if the id is absent.
    async fn replace(&self, employee: Employee) -> PayrollResult<bool>;

    /// Deletes a record. Returns false if the id is absent.
    async fn remove(&self, id: u64) -> PayrollResult<bool>;

    /// Returns every record in id order.
    async fn all(&self) -> PayrollResult<Vec<Employee>>;

    /// Summarizes salaries of records whose `field` equals `value`, ignoring case
    /// and surrounding whitespace.
    async fn salary_summary(&self, field: MatchField, value: &str) -> PayrollResult<SalarySummary>;
}

/// Shared handle to any repository implementation.
pub type RepositoryHandle = Arc<dyn EmployeeRepository>;

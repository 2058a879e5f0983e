//! In-memory employee repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeDraft, SalarySummary, match_key};

use super::repository::{EmployeeRepository, MatchField};

/// The rows of the employee table plus its id sequence.
///
/// Shared by the in-memory and JSON file repositories; the latter persists it
/// verbatim as its snapshot format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct EmployeeTable {
    next_id: u64,
    employees: BTreeMap<u64, Employee>,
}

impl Default for EmployeeTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            employees: BTreeMap::new(),
        }
    }
}

impl EmployeeTable {
    /// Repairs the sequence so it always points past the highest stored id.
    pub(crate) fn normalize_sequence(&mut self) {
        let floor = self.employees.keys().next_back().map_or(1, |id| id + 1);
        self.next_id = self.next_id.max(floor);
    }

    pub(crate) fn insert(&mut self, draft: EmployeeDraft) -> Employee {
        let id = self.next_id;
        self.next_id += 1;
        let employee = Employee::from_draft(id, draft, Utc::now());
        self.employees.insert(id, employee.clone());
        employee
    }

    pub(crate) fn find(&self, id: u64) -> Option<Employee> {
        self.employees.get(&id).cloned()
    }

    pub(crate) fn replace(&mut self, employee: Employee) -> bool {
        match self.employees.get_mut(&employee.id) {
            Some(slot) => {
                *slot = employee;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        self.employees.remove(&id).is_some()
    }

    pub(crate) fn all(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    pub(crate) fn salary_summary(&self, field: MatchField, value: &str) -> SalarySummary {
        let key = match_key(value);
        SalarySummary::from_salaries(
            self.employees
                .values()
                .filter(|employee| field.matches(employee, &key))
                .map(|employee| employee.salary),
        )
    }
}

/// A thread-safe in-memory employee repository.
///
/// Uses `Arc<RwLock<..>>` so clones share the same table. Suitable for tests
/// and for running the service without durable storage.
#[derive(Default, Clone)]
pub struct InMemoryRepository {
    table: Arc<RwLock<EmployeeTable>>,
}

impl InMemoryRepository {
    /// Creates a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryRepository {
    async fn insert(&self, draft: EmployeeDraft) -> PayrollResult<Employee> {
        let mut table = self.table.write().await;
        Ok(table.insert(draft))
    }

    async fn find(&self, id: u64) -> PayrollResult<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table.find(id))
    }

    async fn replace(&self, employee: Employee) -> PayrollResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.replace(employee))
    }

    async fn remove(&self, id: u64) -> PayrollResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.remove(id))
    }

    async fn all(&self) -> PayrollResult<Vec<Employee>> {
        let table = self.table.read().await;
        Ok(table.all())
    }

    async fn salary_summary(&self, field: MatchField, value: &str) -> PayrollResult<SalarySummary> {
        let table = self.table.read().await;
        Ok(table.salary_summary(field, value))
    }
}

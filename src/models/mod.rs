//! Core data models for the employee payroll service.
//!
//! This module contains the domain models shared by the store, the payroll
//! calculator and the HTTP layer.

mod amount;
mod deductions;
mod employee;
mod metrics;

pub use amount::{AmountInput, CURRENCY_SCALE, round_currency};
pub use deductions::Deductions;
pub use employee::{Employee, EmployeeDraft, EmployeeFields, MAX_SALARY, match_key};
pub use metrics::{CountrySalaryMetrics, JobTitleSalaryMetrics, SalarySummary};

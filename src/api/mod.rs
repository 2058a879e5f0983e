//! HTTP API module for the employee payroll service.
//!
//! This module provides the REST endpoints for employee records, salary
//! reports and the deductions calculator.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CountryQuery, DeductionsQuery, DeductionsRequest, EmployeeRequest, JobTitleQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

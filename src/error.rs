//! Error types for the employee payroll service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the store, the calculator and the service setup can report.

use thiserror::Error;

/// The main error type for the employee payroll service.
///
/// # Example
///
/// ```
/// use employee_payroll::error::PayrollError;
///
/// let error = PayrollError::NotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// One or more field rules were violated on create or update.
    #[error("Validation failed: {}", .errors.join(", "))]
    ValidationFailed {
        /// One human-readable message per violated rule.
        errors: Vec<String>,
    },

    /// An ad-hoc value could not be coerced to the required type.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput {
        /// The parameter that carried the bad value.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// A required query or body parameter was absent.
    #[error("{name} is required")]
    MissingParameter {
        /// The name of the missing parameter.
        name: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The storage backend failed to read or write.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for a [`PayrollError::MissingParameter`].
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Shorthand for a [`PayrollError::Storage`] wrapping any displayable cause.
    pub fn storage(cause: impl std::fmt::Display) -> Self {
        Self::Storage {
            message: cause.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

//! Application state for the employee payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::store::EmployeeStore;

/// Shared application state.
///
/// Holds the employee store every handler reads from and writes to.
#[derive(Clone)]
pub struct AppState {
    store: EmployeeStore,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: EmployeeStore) -> Self {
        Self { store }
    }

    /// Returns a reference to the employee store.
    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }
}

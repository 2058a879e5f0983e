//! Employee storage for the employee payroll service.
//!
//! [`EmployeeStore`] enforces the field rules and computes salary reports on
//! top of an [`EmployeeRepository`], which is either kept in memory or
//! persisted to a JSON snapshot file.

mod employee_store;
mod json_file;
mod memory;
mod repository;

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::{PayrollError, PayrollResult};

pub use employee_store::EmployeeStore;
pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use repository::{EmployeeRepository, MatchField, RepositoryHandle};

/// Opens the repository selected by `config`.
pub async fn open_repository(config: &StorageConfig) -> PayrollResult<RepositoryHandle> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory employee storage");
            Ok(Arc::new(InMemoryRepository::new()))
        }
        StorageBackend::File => {
            let path = config.path.as_ref().ok_or_else(|| PayrollError::Storage {
                message: "file backend requires a snapshot path".to_string(),
            })?;
            Ok(Arc::new(JsonFileRepository::open(path).await?))
        }
    }
}

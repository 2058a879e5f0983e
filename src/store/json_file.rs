//! JSON file backed employee repository.
//!
//! The whole table is kept in memory and rewritten to disk after every
//! mutation. Writes go to a sibling temporary file which is then renamed over
//! the snapshot, so a crash never leaves a half-written file behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeDraft, SalarySummary};

use super::memory::EmployeeTable;
use super::repository::{EmployeeRepository, MatchField};

/// An employee repository persisted as a single JSON document.
pub struct JsonFileRepository {
    path: PathBuf,
    table: RwLock<EmployeeTable>,
}

impl JsonFileRepository {
    /// Opens the snapshot at `path`, starting empty if the file does not exist.
    ///
    /// Parent directories are created on first write.
    pub async fn open<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref().to_path_buf();

        let mut table = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<EmployeeTable>(&bytes).map_err(|e| {
                PayrollError::Storage {
                    message: format!("corrupt snapshot '{}': {}", path.display(), e),
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => EmployeeTable::default(),
            Err(e) => return Err(PayrollError::storage(e)),
        };
        table.normalize_sequence();

        info!(path = %path.display(), "Opened employee snapshot");

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    /// Returns the snapshot location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, table: &EmployeeTable) -> PayrollResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(PayrollError::storage)?;
        }

        let bytes = serde_json::to_vec_pretty(table).map_err(PayrollError::storage)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, &bytes)
            .await
            .map_err(PayrollError::storage)?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(PayrollError::storage)?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Wrote employee snapshot");
        Ok(())
    }

    /// Applies `change` to a copy of the table, persists it, then commits.
    ///
    /// The in-memory table is left untouched if the write fails.
    async fn mutate<T>(&self, change: impl FnOnce(&mut EmployeeTable) -> T) -> PayrollResult<T> {
        let mut table = self.table.write().await;
        let mut staged = table.clone();
        let outcome = change(&mut staged);
        self.persist(&staged).await?;
        *table = staged;
        Ok(outcome)
    }
}

#[async_trait]
impl EmployeeRepository for JsonFileRepository {
    async fn insert(&self, draft: EmployeeDraft) -> PayrollResult<Employee> {
        self.mutate(|table| table.insert(draft)).await
    }

    async fn find(&self, id: u64) -> PayrollResult<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table.find(id))
    }

    async fn replace(&self, employee: Employee) -> PayrollResult<bool> {
        {
            let table = self.table.read().await;
            if table.find(employee.id).is_none() {
                return Ok(false);
            }
        }
        self.mutate(|table| table.replace(employee)).await
    }

    async fn remove(&self, id: u64) -> PayrollResult<bool> {
        {
            let table = self.table.read().await;
            if table.find(id).is_none() {
                return Ok(false);
            }
        }
        self.mutate(|table| table.remove(id)).await
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

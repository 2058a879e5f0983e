//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{LoggingConfig, ServerConfig, ServiceConfig, StorageBackend, StorageConfig};

/// Loads and provides access to the service configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   bind_addr: "127.0.0.1:3000"
/// storage:
///   backend: file            # or: memory
///   path: data/employees.json
/// logging:
///   filter: "info,employee_payroll=debug"
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Listening on {}", loader.server().bind_addr);
/// # Ok::<(), employee_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML or is inconsistent.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> PayrollResult<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        let config = if content.trim().is_empty() {
            ServiceConfig::default()
        } else {
            serde_yaml::from_str::<ServiceConfig>(content).map_err(|e| {
                PayrollError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::check(&config, origin)?;
        Ok(Self { config })
    }

    fn check(config: &ServiceConfig, origin: &str) -> PayrollResult<()> {
        if config.storage.backend == StorageBackend::File && config.storage.path.is_none() {
            return Err(PayrollError::ConfigParseError {
                path: origin.to_string(),
                message: "storage.path is required for the file backend".to_string(),
            });
        }
        Ok(())
    }

    /// Replaces the configured bind address.
    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.config.server.bind_addr = bind_addr.into();
        self
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the storage settings.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.storage
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }
}

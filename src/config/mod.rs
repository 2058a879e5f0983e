//! Configuration loading and management for the employee payroll service.
//!
//! This module provides functionality to load the service configuration from
//! a YAML file: server bind address, storage backend and log filter.
//!
//! # Example
//!
//! ```no_run
//! use employee_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Storage backend: {:?}", config.storage().backend);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BIND_ADDR, DEFAULT_LOG_FILTER, LoggingConfig, ServerConfig, ServiceConfig,
    StorageBackend, StorageConfig,
};

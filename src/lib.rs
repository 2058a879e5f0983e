//! Employee payroll service
//!
//! This crate keeps a collection of employee records, reports salary
//! statistics by country and job title, and computes tax deducted at
//! source (TDS) for a gross salary based on the employee's country.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod store;

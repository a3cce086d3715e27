//! # Payroll Common Library
//!
//! Shared code for the payroll-analytics backend:
//! - Employee data model
//! - Database initialization and queries
//! - Error types
//! - Configuration resolution

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};

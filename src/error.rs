//! Error handling for station inventory loading.
//!
//! Provides error types with context for file access, state code
//! resolution, and table export failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Station inventory not found at path: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unknown state code '{code}' on line {line}")]
    UnknownStateCode { code: String, line: usize },

    #[error("Export failed for file: {path} - {reason}")]
    Export { path: PathBuf, reason: String },

    #[error("Invalid case data in file: {path} - {reason}")]
    CaseData { path: PathBuf, reason: String },

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl InventoryError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;

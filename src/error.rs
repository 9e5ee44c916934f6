//! Error types for the HR analytics dashboard.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the store, the mutation boundary and the configuration
//! layer can report. The filter and aggregation stages never fail.

use thiserror::Error;

/// The main error type for the dashboard.
///
/// # Example
///
/// ```
/// use hr_dashboard::error::DashboardError;
///
/// let error = DashboardError::DuplicateKey { employee_number: 42 };
/// assert_eq!(error.to_string(), "Employee number 42 already exists");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// An insert was rejected because the employee number is already taken.
    #[error("Employee number {employee_number} already exists")]
    DuplicateKey {
        /// The employee number that collided.
        employee_number: i64,
    },

    /// The underlying record store failed to read or write.
    #[error("Record store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// A submitted employee field violated its domain constraint.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
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
}

impl DashboardError {
    pub(crate) fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidEmployee {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;

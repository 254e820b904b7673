//! Error types for census operations.
//!
//! All errors implement `std::error::Error` via `thiserror`.

use thiserror::Error;

/// Result type alias for census operations.
pub type CensusResult<T> = Result<T, CensusError>;

/// Errors that can occur while configuring a census run.
#[derive(Debug, Error)]
pub enum CensusError {
    /// Filter configuration failed validation.
    #[error("Invalid filter for {field}: {message}")]
    InvalidFilter {
        /// The configuration field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },
}

impl CensusError {
    /// Creates an invalid filter error.
    pub fn invalid_filter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            field: field.into(),
            message: message.into(),
        }
    }
}

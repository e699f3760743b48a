//! Error types for the contact intake service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::validation::{FieldError, ValidationFailure};
use thiserror::Error;

/// Errors surfaced by the submission operations.
///
/// Each variant corresponds to one HTTP failure class: schema problems,
/// business-rule violations, missing records and store failures.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Malformed or missing input found by structural validation
    #[error("Schema validation failed: {}", join_messages(.0))]
    Schema(Vec<FieldError>),

    /// Input is well-formed but violates a business rule
    #[error("{0}")]
    Validation(String),

    /// Referenced submission does not exist
    #[error("{0}")]
    NotFound(String),

    /// The document store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// Not-found error for a submission ID.
    pub fn not_found() -> Self {
        SubmissionError::NotFound("Contact submission not found".to_string())
    }
}

impl From<ValidationFailure> for SubmissionError {
    fn from(failure: ValidationFailure) -> Self {
        match failure {
            ValidationFailure::Schema(errors) => SubmissionError::Schema(errors),
            ValidationFailure::Domain(errors) => {
                SubmissionError::Validation(join_messages(&errors))
            }
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by a submission store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// MongoDB driver error
    #[error("Document store error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A record with the same ID already exists
    #[error("Duplicate submission id: {0}")]
    DuplicateId(String),

    /// A stored record could not be mapped back to the model
    #[error("Corrupt submission record: {0}")]
    CorruptRecord(String),

    /// The store cannot be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

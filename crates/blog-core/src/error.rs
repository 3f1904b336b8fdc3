//! Domain-level error types.

use thiserror::Error;

/// A required key is absent from a request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing `{field}` in request body")]
pub struct MissingFieldError {
    pub field: String,
}

/// Request payload validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    #[error("Field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Stored record is malformed: {0}")]
    Corrupt(String),
}

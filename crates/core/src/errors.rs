//! Core error types for the shares application.
//!
//! This module defines store-agnostic error types. Storage-specific failures
//! are converted to [`StoreError`] by the storage layer and travel through the
//! core unclassified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the shares application.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested id (or relation) does not exist, or a relation
    /// collection that should hold rows is empty.
    #[error("{0}")]
    NotFound(String),

    /// The payload failed validation, or the entity to update does not exist.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for request payloads.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

/// Store-agnostic error type for persistence operations.
///
/// The core never inspects these; they are propagated to the boundary and
/// reported as internal failures.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A referential or uniqueness constraint was violated.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Classification consumed by the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Internal,
}

impl Error {
    /// Builds a not-found error of the form `"<message><id>"`.
    pub fn not_found_id(message: &str, id: i64) -> Self {
        Error::NotFound(format!("{}{}", message, id))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Validation(_) => ErrorKind::BadRequest,
            Error::Store(_) | Error::InvalidConfigValue(_) | Error::Unexpected(_) => {
                ErrorKind::Internal
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_bad_request(&self) -> bool {
        self.kind() == ErrorKind::BadRequest
    }
}

/// Error body handed to the presentation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub kind: ErrorKind,
    pub message: String,
    /// Description of the request that failed (e.g. `uri=/api/company/7`).
    pub details: String,
}

impl ErrorResponse {
    pub fn new(error: &Error, details: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: error.kind(),
            message: error.to_string(),
            details: details.into(),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

//! Storage-specific error types for the in-memory store.
//!
//! These errors are internal to the storage layer and are converted to
//! `sharesapp_core::Error` before being returned to callers.

use sharesapp_core::errors::{Error, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Table lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Row not found: {0}")]
    RowNotFound(String),

    #[error("Row still referenced: {0}")]
    StillReferenced(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::LockPoisoned(e) => Error::Store(StoreError::Internal(e)),
            StorageError::ForeignKeyViolation(e) => {
                Error::Store(StoreError::ConstraintViolation(e))
            }
            StorageError::RowNotFound(e) => Error::Store(StoreError::ConstraintViolation(
                format!("cannot save missing row {}", e),
            )),
            StorageError::StillReferenced(e) => Error::Store(StoreError::ConstraintViolation(e)),
        }
    }
}

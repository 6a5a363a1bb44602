//! Storage-specific error types for MongoDB operations.
//!
//! This module wraps driver errors and converts them to the
//! database-agnostic error types defined in `dompetku_core`.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

use dompetku_core::errors::{DatabaseError, Error};

/// Storage-specific errors that wrap MongoDB driver types.
///
/// These errors are internal to the storage layer and are converted to
/// `dompetku_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] MongoError),

    #[error("Operation '{0}' timed out")]
    Timeout(String),

    #[error("Failed to decode document: {0}")]
    Decode(String),
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == 11000
    )
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::QueryFailed(e) if is_duplicate_key(&e) => {
                Error::Database(DatabaseError::UniqueViolation(e.to_string()))
            }
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::Timeout(op) => Error::Database(DatabaseError::Timeout(op)),
            StorageError::Decode(e) => Error::Database(DatabaseError::Decode(e)),
        }
    }
}

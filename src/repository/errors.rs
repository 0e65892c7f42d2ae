use std::io::{Error as IoError, ErrorKind};

use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<IoError> for RepositoryError {
    fn from(err: IoError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => RepositoryError::NotFound,
            ErrorKind::PermissionDenied => {
                RepositoryError::StorageError(format!("Permission denied: {err}"))
            }
            ErrorKind::InvalidData => {
                RepositoryError::ValidationError(format!("Invalid data: {err}"))
            }
            _ => RepositoryError::StorageError(err.to_string()),
        }
    }
}

impl From<JsonError> for RepositoryError {
    fn from(err: JsonError) -> Self {
        if err.is_io() {
            RepositoryError::StorageError(format!("Read error: {err}"))
        } else {
            RepositoryError::ValidationError(format!("Malformed snapshot: {err}"))
        }
    }
}

//! Form definitions backing the document renderer.

use thiserror::Error;
use validator::ValidationErrors;

pub mod document;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid snapshot name")]
    InvalidSnapshot,

    #[error("invalid placeholder mode")]
    InvalidPlaceholderMode,

    #[error("invalid date, expected YYYY-MM-DD")]
    InvalidDate,
}

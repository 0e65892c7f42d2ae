pub mod blocks;
pub mod document;
pub mod phase;
pub mod variables;

use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("Form error: {0}")]
    Form(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Render error: {0}")]
    Render(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

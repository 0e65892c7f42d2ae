//! Error conversion glue between the domain, form and service layers.
//!
//! The domain layer must not depend on service/repository error types, so
//! the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

#[cfg(feature = "render")]
impl From<tera::Error> for ServiceError {
    fn from(val: tera::Error) -> Self {
        ServiceError::Render(val.to_string())
    }
}

//! Error conversion glue between the domain, storage and service layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions out of [`TypeConstraintError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;
#[cfg(feature = "server")]
use crate::services::ServiceError;

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::InvalidParameter(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::InvalidRow(val.to_string())
    }
}

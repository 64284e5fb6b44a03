use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer to the transport boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or out-of-range filter/pagination input. Always raised before
    /// the store is touched.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The store failed; the original error is kept as is.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(RepositoryError),

    /// Data returned by the store broke a mapping guarantee.
    #[error("Internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidRow(message) => {
                ServiceError::InternalInvariantViolation(message)
            }
            other => ServiceError::StoreUnavailable(other),
        }
    }
}

//! Query-string forms accepted by the API routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::services::ServiceError;

pub mod member;

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    Malformed(String),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid team name")]
    InvalidTeamName,

    #[error("invalid sort: {0}")]
    InvalidSort(String),

    #[error("use either page/size or offset/limit, not both")]
    ConflictingPaging,

    #[error("page size {requested} exceeds the maximum of {max}")]
    PageSizeTooLarge { requested: i64, max: i64 },
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::InvalidParameter(err.to_string())
    }
}

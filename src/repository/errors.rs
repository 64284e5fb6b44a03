use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures reported by the member/team store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Query failed inside SQLite or Diesel.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// No usable connection could be obtained or kept.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A write was rejected by a table constraint.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored row could not be mapped into the domain read model.
    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation => {
                        RepositoryError::ConstraintViolation(message)
                    }
                    DatabaseErrorKind::ClosedConnection => {
                        RepositoryError::ConnectionError(message)
                    }
                    _ => RepositoryError::DatabaseError(message),
                }
            }
            DieselError::DeserializationError(e) => RepositoryError::InvalidRow(e.to_string()),
            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::MemberName;

    #[test]
    fn domain_constraint_failure_is_an_invalid_row() {
        let err = RepositoryError::from(MemberName::new("  ").unwrap_err());
        assert!(matches!(err, RepositoryError::InvalidRow(_)));
    }

    #[test]
    fn missing_row_is_a_database_error() {
        let err = RepositoryError::from(DieselError::NotFound);
        assert!(matches!(err, RepositoryError::DatabaseError(_)));
    }
}

//! Error handling
//!
//! The wire-level error types live in `shared::error`; this module re-exports
//! them and maps server-internal errors onto them.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::{RepoError, UniqueField};

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate {
                field: UniqueField::IdNumber,
                value,
            } => AppError::duplicate_id_number(&value),
            RepoError::Duplicate {
                field: UniqueField::EmployeeNumber,
                value,
            } => AppError::duplicate_employee_number(&value),
            RepoError::Database(detail) => {
                // Storage details stay in the log
                tracing::error!(error = %detail, "Store operation failed");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let err: AppError = RepoError::Duplicate {
            field: UniqueField::IdNumber,
            value: "123".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::EmployeeIdNumberExists);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);

        let err: AppError = RepoError::Duplicate {
            field: UniqueField::EmployeeNumber,
            value: "E1".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::EmployeeNumberExists);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_is_generic() {
        let err: AppError = RepoError::Database("disk I/O error at /var/db".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("/var/db"));
    }
}

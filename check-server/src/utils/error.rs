//! Error handling
//!
//! The error vocabulary lives in the `shared` crate; this module
//! re-exports it and bridges repository errors into [`AppError`] so
//! handlers and services can use `?` across the seam.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_mapping() {
        let err: AppError = RepoError::NotFound("Employee employee:x not found".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: AppError = RepoError::Validation("Invalid ID".to_string()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err: AppError = RepoError::Database("boom".to_string()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}

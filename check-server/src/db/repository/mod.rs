//! Repository Module
//!
//! CRUD operations for the SurrealDB tables. Multi-step invariants
//! (version assignment, the soft/hard delete branch, dropdown upserts)
//! run as single multi-statement transactions so no other writer can
//! interleave between the read and the write.

pub mod device_check;
pub mod dropdown_option;
pub mod employee;

// Re-exports
pub use device_check::DeviceCheckRepository;
pub use dropdown_option::DropdownOptionRepository;
pub use employee::EmployeeRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations read "Database index `...` already
        // contains ..."; surface them as duplicates, not infrastructure
        // failures.
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
///
/// IDs cross every boundary as "table:id" strings and are parsed to
/// `surrealdb::RecordId` at the repository seam.
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Parse a "table:id" string, rejecting malformed input and ids
    /// pointing at a different table
    pub fn parse_id(&self, table: &str, id: &str) -> RepoResult<surrealdb::RecordId> {
        let record: surrealdb::RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if record.table() != table {
            return Err(RepoError::Validation(format!(
                "Expected {} ID, got: {}",
                table, id
            )));
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_violation_maps_to_duplicate() {
        let err = surrealdb::Error::Api(surrealdb::error::Api::Query(
            "Database index `check_employee_version` already contains ['employee:a', 1], \
             with record `device_check:x`"
                .to_string(),
        ));
        assert!(matches!(RepoError::from(err), RepoError::Duplicate(_)));

        let err = surrealdb::Error::Api(surrealdb::error::Api::Query(
            "connection refused".to_string(),
        ));
        assert!(matches!(RepoError::from(err), RepoError::Database(_)));
    }
}

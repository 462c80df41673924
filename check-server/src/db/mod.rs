//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend) plus per-table repositories.

pub mod models;
pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// Database service owning the embedded SurrealDB handle
///
/// Constructed once during [`crate::core::ServerState::initialize`] and
/// passed by handle; there is no process-wide cached connection.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at the given path and define indexes
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("device_check")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        let service = Self { db };
        service.define_schema().await?;

        tracing::info!("Database connection established (SurrealDB RocksDB at {db_path})");

        Ok(service)
    }

    /// Define indexes. Idempotent, runs at every startup.
    ///
    /// The UNIQUE index on (employeeId, version) is the backstop for the
    /// per-employee version invariant: even if two creations race, the
    /// second commit fails instead of producing a duplicate version.
    async fn define_schema(&self) -> Result<(), AppError> {
        let statements = [
            "DEFINE INDEX IF NOT EXISTS employee_full_name ON employee FIELDS fullName",
            "DEFINE INDEX IF NOT EXISTS employee_status ON employee FIELDS status",
            "DEFINE INDEX IF NOT EXISTS check_employee_version ON device_check FIELDS employeeId, version UNIQUE",
            "DEFINE INDEX IF NOT EXISTS check_employee_date ON device_check FIELDS employeeId, checkDate",
            "DEFINE INDEX IF NOT EXISTS check_date ON device_check FIELDS checkDate",
            "DEFINE INDEX IF NOT EXISTS option_field_value ON dropdown_option FIELDS fieldName, value UNIQUE",
            "DEFINE INDEX IF NOT EXISTS option_field_usage ON dropdown_option FIELDS fieldName, usageCount",
        ];

        for stmt in statements {
            self.db
                .query(stmt)
                .await
                .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        }

        Ok(())
    }
}

//! Server state
//!
//! [`ServerState`] holds the shared handles every request needs: the
//! embedded database, the per-table repositories, and the consistency
//! service. Cloning is shallow, so handlers receive it by value.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{DeviceCheckRepository, DropdownOptionRepository, EmployeeRepository};
use crate::services::CheckService;
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Employee repository
    pub employees: EmployeeRepository,
    /// Device check repository
    pub checks: DeviceCheckRepository,
    /// Dropdown option repository
    pub options: DropdownOptionRepository,
    /// Cross-table consistency service
    pub check_service: CheckService,
}

impl ServerState {
    /// Initialize server state in order:
    /// 1. working directory layout
    /// 2. database (work_dir/database/devicecheck.db)
    /// 3. repositories and the consistency service
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("devicecheck.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        let employees = EmployeeRepository::new(db.clone());
        let checks = DeviceCheckRepository::new(db.clone());
        let options = DropdownOptionRepository::new(db.clone());
        let check_service =
            CheckService::new(employees.clone(), checks.clone(), options.clone());

        Ok(Self {
            config: config.clone(),
            db,
            employees,
            checks,
            options,
            check_service,
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}

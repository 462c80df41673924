//! Device Check Server - IT department inspection record keeping
//!
//! # Architecture Overview
//!
//! - **Database** (`db`): embedded SurrealDB storage with per-table repositories
//! - **Consistency** (`services`): version assignment, employee aggregate
//!   maintenance, dropdown suggestion harvesting
//! - **HTTP API** (`api`): RESTful API endpoints
//!
//! # Module Structure
//!
//! ```text
//! check-server/src/
//! ├── core/          # config, state, server
//! ├── services/      # consistency maintainer, router assembly
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # database layer (models + repositories)
//! └── utils/         # logging, validation, error re-exports
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging. Call once at process start.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____            _           ________              __
   / __ \___ _   __(_)_______  / ____/ /_  ___  _____/ /__
  / / / / _ \ | / / / ___/ _ \/ /   / __ \/ _ \/ ___/ //_/
 / /_/ /  __/ |/ / / /__/  __/ /___/ / / /  __/ /__/ ,<
/_____/\___/|___/_/\___/\___/\____/_/ /_/\___/\___/_/|_|
    "#
    );
}

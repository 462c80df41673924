//! Utility modules

pub mod error;
pub mod logger;
pub mod validation;

// Re-export error types
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

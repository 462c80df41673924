//! Shared types for the device check server
//!
//! Common types used across crates: the unified error system, wire-level
//! domain vocabularies, and list/pagination envelopes.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{PageQuery, Paginated, Pagination, SortOrder};

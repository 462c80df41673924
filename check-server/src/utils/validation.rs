//! Request validation helpers

use crate::utils::{AppError, AppResult};

/// Reject empty or whitespace-only required parameters
pub fn require_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} is required", field))
            .with_detail("field", field.to_string()));
    }
    Ok(())
}

/// Clamp a client-supplied page size into a sane range
pub fn clamp_limit(limit: u64, max: u64) -> u64 {
    limit.clamp(1, max)
}

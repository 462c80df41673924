//! API route modules
//!
//! - [`health`] - health check
//! - [`employees`] - employee directory
//! - [`device_checks`] - inspection records
//! - [`dropdown_options`] - form autocomplete suggestions

pub mod device_checks;
pub mod dropdown_options;
pub mod employees;
pub mod health;

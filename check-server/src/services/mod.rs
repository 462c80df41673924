//! Service layer
//!
//! - [`check_service`] - cross-table consistency around device checks
//! - [`http`] - router assembly and request logging

pub mod check_service;
pub mod http;

pub use check_service::CheckService;

//! Data models
//!
//! Wire-level vocabularies and envelopes shared between the server and
//! its clients. Database row types live in the server crate; only the
//! closed enums, nested inspection payload sections, and list envelopes
//! are shared.

pub mod device_check;
pub mod employee;
pub mod list;

// Re-exports
pub use device_check::*;
pub use employee::*;
pub use list::*;

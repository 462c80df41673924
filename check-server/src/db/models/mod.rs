//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod device_check;
pub mod dropdown_option;
pub mod employee;

// Re-exports
pub use device_check::{DeviceCheck, DeviceCheckCreate, DeviceCheckId, DeviceCheckUpdate};
pub use dropdown_option::{DropdownOption, DropdownOptionSave};
pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};

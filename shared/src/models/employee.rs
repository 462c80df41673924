//! Employee wire vocabulary

use serde::{Deserialize, Serialize};

/// Employee lifecycle status
///
/// `Resigned` is also the target of the soft-delete path: deleting an
/// employee who still has device checks flips status instead of removing
/// the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    Resigned,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Resigned => "Resigned",
        }
    }
}

//! Employee Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::EmployeeStatus;
use surrealdb::RecordId;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee row
///
/// `totalDeviceChecks` and `lastCheckDate` are denormalized caches over
/// the device_check table, maintained by the consistency service. They
/// are never written by the normal update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub total_device_checks: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_check_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// Update employee payload (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeeCreate {
    /// Build the row to persist: trims names, derives fullName,
    /// upper-cases position/department, lower-cases email.
    pub fn into_row(self, now: DateTime<Utc>) -> Employee {
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        let full_name = format!("{} {}", first_name, last_name).trim().to_string();

        Employee {
            id: None,
            full_name,
            first_name,
            last_name,
            position: self.position.trim().to_uppercase(),
            department: self
                .department
                .as_deref()
                .map(|d| d.trim().to_uppercase())
                .filter(|d| !d.is_empty()),
            email: self
                .email
                .as_deref()
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty()),
            phone_number: self
                .phone_number
                .as_deref()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            status: self.status,
            total_device_checks: 0,
            last_check_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Employee {
    /// Apply an update in place, re-deriving fullName when either name
    /// component changes and keeping the write-time normalization rules.
    /// Aggregate fields are untouched.
    pub fn apply_update(&mut self, update: EmployeeUpdate, now: DateTime<Utc>) {
        let name_changed = update.first_name.is_some() || update.last_name.is_some();

        if let Some(first_name) = update.first_name {
            self.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name.trim().to_string();
        }
        if name_changed {
            self.full_name = format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string();
        }
        if let Some(position) = update.position {
            self.position = position.trim().to_uppercase();
        }
        if let Some(department) = update.department {
            let d = department.trim().to_uppercase();
            self.department = (!d.is_empty()).then_some(d);
        }
        if let Some(email) = update.email {
            let e = email.trim().to_lowercase();
            self.email = (!e.is_empty()).then_some(e);
        }
        if let Some(phone_number) = update.phone_number {
            let p = phone_number.trim().to_string();
            self.phone_number = (!p.is_empty()).then_some(p);
        }
        if let Some(status) = update.status {
            self.status = status;
        }

        self.updated_at = now;
    }
}

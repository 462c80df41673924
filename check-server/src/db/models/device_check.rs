//! Device Check Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{
    AdditionalInfo, ApplicationEntry, DeviceCondition, DeviceDetail, EmployeeSnapshot,
    OperatingSystem, Security, Specification,
};
use surrealdb::RecordId;

/// Device check ID type
pub type DeviceCheckId = RecordId;

/// Device check row
///
/// `employeeId`, `employeeSnapshot` and `version` are immutable after
/// creation. The snapshot is an audit trail of who the device belonged
/// to at inspection time and deliberately does not follow later
/// employee edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCheck {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<DeviceCheckId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee_id: RecordId,
    pub employee_snapshot: EmployeeSnapshot,
    pub device_detail: DeviceDetail,
    pub operating_system: OperatingSystem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<Specification>,
    pub device_condition: DeviceCondition,
    #[serde(default)]
    pub work_applications: Vec<ApplicationEntry>,
    #[serde(default)]
    pub non_work_applications: Vec<ApplicationEntry>,
    pub security: Security,
    pub additional_info: AdditionalInfo,
    pub check_date: DateTime<Utc>,
    /// Per-employee ordinal, assigned once at creation
    #[serde(default)]
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create device check payload
///
/// Snapshot and version are assigned server-side; a missing checkDate
/// defaults to the creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCheckCreate {
    pub employee_id: String,
    pub device_detail: DeviceDetail,
    pub operating_system: OperatingSystem,
    pub specification: Option<Specification>,
    pub device_condition: DeviceCondition,
    #[serde(default)]
    pub work_applications: Vec<ApplicationEntry>,
    #[serde(default)]
    pub non_work_applications: Vec<ApplicationEntry>,
    pub security: Security,
    pub additional_info: AdditionalInfo,
    pub check_date: Option<DateTime<Utc>>,
}

/// Update device check payload
///
/// `employeeId` and `version` are carried only so attempts to change
/// them can be rejected; they are never written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCheckUpdate {
    pub employee_id: Option<String>,
    pub version: Option<u32>,
    pub device_detail: Option<DeviceDetail>,
    pub operating_system: Option<OperatingSystem>,
    pub specification: Option<Specification>,
    pub device_condition: Option<DeviceCondition>,
    pub work_applications: Option<Vec<ApplicationEntry>>,
    pub non_work_applications: Option<Vec<ApplicationEntry>>,
    pub security: Option<Security>,
    pub additional_info: Option<AdditionalInfo>,
    pub check_date: Option<DateTime<Utc>>,
}

impl DeviceCheckCreate {
    /// Build the row to persist. The version starts at 0 and is replaced
    /// inside the creation transaction.
    pub fn into_row(
        self,
        employee_id: RecordId,
        snapshot: EmployeeSnapshot,
        now: DateTime<Utc>,
    ) -> DeviceCheck {
        DeviceCheck {
            id: None,
            employee_id,
            employee_snapshot: snapshot,
            device_detail: self.device_detail,
            operating_system: self.operating_system,
            specification: self.specification,
            device_condition: self.device_condition,
            work_applications: self.work_applications,
            non_work_applications: self.non_work_applications,
            security: self.security,
            additional_info: self.additional_info,
            check_date: self.check_date.unwrap_or(now),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl DeviceCheck {
    /// Apply an update in place. Identity fields (employeeId, snapshot,
    /// version) are not touched; the caller has already rejected
    /// attempts to change them.
    pub fn apply_update(&mut self, update: DeviceCheckUpdate, now: DateTime<Utc>) {
        if let Some(device_detail) = update.device_detail {
            self.device_detail = device_detail;
        }
        if let Some(operating_system) = update.operating_system {
            self.operating_system = operating_system;
        }
        if let Some(specification) = update.specification {
            self.specification = Some(specification);
        }
        if let Some(device_condition) = update.device_condition {
            self.device_condition = device_condition;
        }
        if let Some(work_applications) = update.work_applications {
            self.work_applications = work_applications;
        }
        if let Some(non_work_applications) = update.non_work_applications {
            self.non_work_applications = non_work_applications;
        }
        if let Some(security) = update.security {
            self.security = security;
        }
        if let Some(additional_info) = update.additional_info {
            self.additional_info = additional_info;
        }
        if let Some(check_date) = update.check_date {
            self.check_date = check_date;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::*;

    fn sample_create() -> DeviceCheckCreate {
        DeviceCheckCreate {
            employee_id: "employee:abc".to_string(),
            device_detail: DeviceDetail {
                device_type: DeviceType::Laptop,
                ownership: Ownership::Company,
                device_brand: "Lenovo".to_string(),
                device_model: "T14".to_string(),
                serial_number: "SN-001".to_string(),
            },
            operating_system: OperatingSystem {
                os_type: OsType::Windows,
                os_version: "11 Pro".to_string(),
                os_license: License::Original,
                os_regular_update: true,
            },
            specification: None,
            device_condition: DeviceCondition {
                device_suitability: DeviceSuitability::Suitable,
                battery_suitability: "Good".to_string(),
                keyboard_condition: "Good".to_string(),
                touchpad_condition: "Good".to_string(),
                monitor_condition: "Good".to_string(),
                wifi_condition: "Good".to_string(),
            },
            work_applications: vec![],
            non_work_applications: vec![],
            security: Security {
                antivirus: AntivirusInfo {
                    status: AntivirusStatus::Active,
                    list: vec![],
                },
                vpn: VpnInfo {
                    status: AvailabilityStatus::NotAvailable,
                    list: vec![],
                },
            },
            additional_info: AdditionalInfo {
                password_usage: AvailabilityStatus::Available,
                other_notes: None,
                inspector_pic_name: None,
            },
            check_date: None,
        }
    }

    #[test]
    fn test_into_row_defaults_check_date() {
        let now = Utc::now();
        let snapshot = EmployeeSnapshot {
            full_name: "Jane Doe".to_string(),
            position: "ENGINEER".to_string(),
            department: None,
        };
        let employee_id: RecordId = "employee:abc".parse().unwrap();
        let row = sample_create().into_row(employee_id, snapshot, now);

        assert_eq!(row.check_date, now);
        assert_eq!(row.version, 0);
        assert_eq!(row.employee_snapshot.full_name, "Jane Doe");
    }

    #[test]
    fn test_apply_update_keeps_identity() {
        let now = Utc::now();
        let snapshot = EmployeeSnapshot {
            full_name: "Jane Doe".to_string(),
            position: "ENGINEER".to_string(),
            department: None,
        };
        let employee_id: RecordId = "employee:abc".parse().unwrap();
        let mut row = sample_create().into_row(employee_id.clone(), snapshot, now);
        row.version = 2;

        row.apply_update(
            DeviceCheckUpdate {
                device_detail: Some(DeviceDetail {
                    device_type: DeviceType::Pc,
                    ownership: Ownership::Personal,
                    device_brand: "Dell".to_string(),
                    device_model: "XPS".to_string(),
                    serial_number: "SN-002".to_string(),
                }),
                ..Default::default()
            },
            now,
        );

        assert_eq!(row.device_detail.device_brand, "Dell");
        assert_eq!(row.version, 2);
        assert_eq!(row.employee_id, employee_id);
        assert_eq!(row.employee_snapshot.full_name, "Jane Doe");
    }
}

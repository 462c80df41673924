//! Device check consistency service
//!
//! Owns every write that touches more than one table: check creation
//! (snapshot capture, version assignment, employee aggregates, dropdown
//! harvesting), check updates (identity guards, aggregate refresh on
//! date edits), and the two delete flows.
//!
//! Aggregate refreshes and dropdown harvesting are deliberately
//! non-fatal: the check write has already committed, so a failure here
//! is logged and repaired by the next successful refresh.

use crate::db::models::{DeviceCheck, DeviceCheckCreate, DeviceCheckUpdate, DropdownOptionSave};
use crate::db::repository::{
    DeviceCheckRepository, DropdownOptionRepository, EmployeeRepository,
    employee::DeleteOutcome,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use futures::future::join_all;
use shared::models::EmployeeSnapshot;

#[derive(Clone)]
pub struct CheckService {
    employees: EmployeeRepository,
    checks: DeviceCheckRepository,
    options: DropdownOptionRepository,
}

impl CheckService {
    pub fn new(
        employees: EmployeeRepository,
        checks: DeviceCheckRepository,
        options: DropdownOptionRepository,
    ) -> Self {
        Self {
            employees,
            checks,
            options,
        }
    }

    /// Create a device check: resolve the employee, freeze the snapshot,
    /// persist with the next version, then refresh aggregates and
    /// harvest dropdown suggestions.
    pub async fn create_check(&self, data: DeviceCheckCreate) -> AppResult<DeviceCheck> {
        let employee = self
            .employees
            .find_by_id(&data.employee_id)
            .await?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::EmployeeNotFound,
                    format!("Employee {} not found", data.employee_id),
                )
            })?;

        let employee_rid = employee
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Employee row missing id"))?;
        let snapshot = EmployeeSnapshot {
            full_name: employee.full_name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
        };

        let row = data.into_row(employee_rid, snapshot, chrono::Utc::now());
        let created = self.checks.create(row).await?;

        self.refresh_employee_stats(&created.employee_id.to_string())
            .await;
        self.spawn_harvest(&created);

        Ok(created)
    }

    /// Update a device check. Attempts to change the owning employee or
    /// the version number are rejected; a changed checkDate retriggers
    /// the aggregate refresh because lastCheckDate may move either way.
    pub async fn update_check(&self, id: &str, data: DeviceCheckUpdate) -> AppResult<DeviceCheck> {
        let existing = self.checks.find_by_id(id).await?.ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CheckNotFound,
                format!("Device check {} not found", id),
            )
        })?;

        if let Some(employee_id) = &data.employee_id
            && *employee_id != existing.employee_id.to_string()
        {
            return Err(AppError::new(ErrorCode::CheckEmployeeImmutable));
        }
        if let Some(version) = data.version
            && version != existing.version
        {
            return Err(AppError::new(ErrorCode::CheckVersionImmutable));
        }

        let date_changed = data
            .check_date
            .map(|d| d != existing.check_date)
            .unwrap_or(false);

        let updated = self.checks.update(id, data).await?;

        if date_changed {
            self.refresh_employee_stats(&updated.employee_id.to_string())
                .await;
        }

        Ok(updated)
    }

    /// Delete a check and refresh the owning employee's aggregates
    pub async fn delete_check(&self, id: &str) -> AppResult<()> {
        let removed = self.checks.delete(id).await.map_err(|e| match e {
            crate::db::repository::RepoError::NotFound(msg) => {
                AppError::with_message(ErrorCode::CheckNotFound, msg)
            }
            other => other.into(),
        })?;

        self.refresh_employee_stats(&removed.employee_id.to_string())
            .await;
        Ok(())
    }

    /// Delete an employee, soft or hard depending on check history
    pub async fn delete_employee(&self, id: &str) -> AppResult<DeleteOutcome> {
        let outcome = self.employees.delete(id).await.map_err(|e| match e {
            crate::db::repository::RepoError::NotFound(msg) => {
                AppError::with_message(ErrorCode::EmployeeNotFound, msg)
            }
            other => other.into(),
        })?;
        Ok(outcome)
    }

    /// Recompute one employee's aggregates, logging instead of failing:
    /// the triggering write has already committed.
    async fn refresh_employee_stats(&self, employee_id: &str) {
        if let Err(e) = self.employees.refresh_check_stats(employee_id).await {
            tracing::warn!("Failed to refresh check stats for {employee_id}: {e}");
        }
    }

    /// Fire-and-forget dropdown suggestion harvesting
    fn spawn_harvest(&self, check: &DeviceCheck) {
        let entries = Self::harvest_entries(check);
        if entries.is_empty() {
            return;
        }
        let options = self.options.clone();
        tokio::spawn(async move {
            let saves = entries
                .iter()
                .map(|e| options.upsert(&e.field_name, &e.value, e.category.as_deref()));
            for result in join_all(saves).await {
                if let Err(e) = result {
                    tracing::warn!("Dropdown option harvest failed: {e}");
                }
            }
        });
    }

    /// The free-text fields worth remembering as suggestions
    fn harvest_entries(check: &DeviceCheck) -> Vec<DropdownOptionSave> {
        let mut entries = Vec::new();
        let mut push = |field: &str, value: &str, category: Option<&str>| {
            if !value.trim().is_empty() {
                entries.push(DropdownOptionSave {
                    field_name: field.to_string(),
                    value: value.to_string(),
                    category: category.map(str::to_string),
                });
            }
        };

        push("deviceBrand", &check.device_detail.device_brand, None);
        push("osVersion", &check.operating_system.os_version, None);
        if let Some(spec) = &check.specification {
            if let Some(ram) = &spec.ram_capacity {
                push("ramCapacity", ram, None);
            }
            if let Some(capacity) = &spec.memory_capacity {
                push("memoryCapacity", capacity, None);
            }
            if let Some(processor) = &spec.processor {
                push("processor", processor, None);
            }
        }
        for app in &check.work_applications {
            push("applicationName", &app.application_name, Some("workApps"));
        }
        for app in &check.non_work_applications {
            push("applicationName", &app.application_name, Some("nonWorkApps"));
        }
        for av in &check.security.antivirus.list {
            push("antivirus", &av.application_name, None);
        }
        for vpn in &check.security.vpn.list {
            push("vpnName", &vpn.vpn_name, None);
        }
        if let Some(pic) = &check.additional_info.inspector_pic_name {
            push("inspectorPICName", pic, None);
        }

        entries
    }

    pub fn employees(&self) -> &EmployeeRepository {
        &self.employees
    }

    pub fn checks(&self) -> &DeviceCheckRepository {
        &self.checks
    }

    pub fn options(&self) -> &DropdownOptionRepository {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::DeviceCheckCreate;
    use chrono::Utc;
    use shared::models::*;
    use surrealdb::RecordId;

    fn sample_check() -> DeviceCheck {
        let create = DeviceCheckCreate {
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
            specification: Some(Specification {
                ram_capacity: Some("16GB".to_string()),
                memory_type: Some(MemoryType::Ssd),
                memory_capacity: Some("512GB".to_string()),
                processor: Some("i7-1365U".to_string()),
            }),
            device_condition: DeviceCondition {
                device_suitability: DeviceSuitability::Suitable,
                battery_suitability: "Good".to_string(),
                keyboard_condition: "Good".to_string(),
                touchpad_condition: "Good".to_string(),
                monitor_condition: "Good".to_string(),
                wifi_condition: "Good".to_string(),
            },
            work_applications: vec![ApplicationEntry {
                application_name: "Office".to_string(),
                license: License::Original,
                notes: None,
            }],
            non_work_applications: vec![],
            security: Security {
                antivirus: AntivirusInfo {
                    status: AntivirusStatus::Active,
                    list: vec![ApplicationEntry {
                        application_name: "Defender".to_string(),
                        license: License::Original,
                        notes: None,
                    }],
                },
                vpn: VpnInfo {
                    status: AvailabilityStatus::Available,
                    list: vec![VpnEntry {
                        vpn_name: "WireGuard".to_string(),
                        license: License::OpenSource,
                        notes: None,
                    }],
                },
            },
            additional_info: AdditionalInfo {
                password_usage: AvailabilityStatus::Available,
                other_notes: None,
                inspector_pic_name: Some("Alice".to_string()),
            },
            check_date: None,
        };
        let employee_id: RecordId = "employee:abc".parse().unwrap();
        let snapshot = EmployeeSnapshot {
            full_name: "Jane Doe".to_string(),
            position: "ENGINEER".to_string(),
            department: None,
        };
        create.into_row(employee_id, snapshot, Utc::now())
    }

    #[test]
    fn test_harvest_entries_covers_free_text_fields() {
        let check = sample_check();
        let entries = CheckService::harvest_entries(&check);

        let field = |name: &str| entries.iter().filter(|e| e.field_name == name).count();
        assert_eq!(field("deviceBrand"), 1);
        assert_eq!(field("osVersion"), 1);
        assert_eq!(field("ramCapacity"), 1);
        assert_eq!(field("memoryCapacity"), 1);
        assert_eq!(field("processor"), 1);
        assert_eq!(field("applicationName"), 1);
        assert_eq!(field("antivirus"), 1);
        assert_eq!(field("vpnName"), 1);
        assert_eq!(field("inspectorPICName"), 1);

        let app = entries
            .iter()
            .find(|e| e.field_name == "applicationName")
            .unwrap();
        assert_eq!(app.category.as_deref(), Some("workApps"));
    }

    #[test]
    fn test_harvest_skips_blank_values() {
        let mut check = sample_check();
        check.device_detail.device_brand = "   ".to_string();
        check.additional_info.inspector_pic_name = None;

        let entries = CheckService::harvest_entries(&check);
        assert!(!entries.iter().any(|e| e.field_name == "deviceBrand"));
        assert!(!entries.iter().any(|e| e.field_name == "inspectorPICName"));
    }
}

//! Device Check Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{DeviceCheck, DeviceCheckUpdate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{DeviceSuitability, Ownership, SortOrder};
use std::collections::BTreeMap;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "device_check";

const SORTABLE: &[&str] = &["checkDate", "createdAt", "updatedAt", "version"];

/// Filters for the device check list endpoint
#[derive(Debug, Clone, Default)]
pub struct DeviceCheckListFilter {
    /// Matches snapshot fullName, device brand, model, or serial number
    pub search: Option<String>,
    pub employee_id: Option<String>,
    /// Snapshot department, not the employee's current one
    pub department: Option<String>,
    pub suitability: Option<DeviceSuitability>,
    pub ownership: Option<Ownership>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub limit: u64,
    pub start: u64,
}

/// Aggregate figures for one employee's check history
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub total_checks: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_check_date: Option<DateTime<Utc>>,
    pub device_types: BTreeMap<String, u64>,
    pub ownership: BTreeMap<String, u64>,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct GroupRow {
    key: String,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct CheckDateRow {
    #[serde(rename = "checkDate")]
    check_date: DateTime<Utc>,
}

#[derive(Clone)]
pub struct DeviceCheckRepository {
    base: BaseRepository,
}

impl DeviceCheckRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new check with its version assigned inside the same
    /// transaction that reads the current maximum. The unique
    /// (employeeId, version) index backstops the transaction if two
    /// writers still land on the same ordinal.
    pub async fn create(&self, row: DeviceCheck) -> RepoResult<DeviceCheck> {
        let employee_id = row.employee_id.to_string();

        let mut result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $next = (((SELECT version FROM device_check WHERE employeeId = $eid ORDER BY version DESC LIMIT 1)[0].version) ?? 0) + 1;
                LET $created = (CREATE device_check CONTENT $data);
                UPDATE $created SET version = $next RETURN AFTER;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("eid", employee_id))
            .bind(("data", row))
            .await?;

        let created: Vec<DeviceCheck> = result.take(2)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create device check".to_string()))
    }

    fn filter_conditions(filter: &DeviceCheckListFilter) -> Vec<&'static str> {
        let mut conditions = Vec::new();
        if filter.search.is_some() {
            conditions.push(
                "(string::contains(string::lowercase(employeeSnapshot.fullName), $search) \
                 OR string::contains(string::lowercase(deviceDetail.deviceBrand), $search) \
                 OR string::contains(string::lowercase(deviceDetail.deviceModel), $search) \
                 OR string::contains(string::lowercase(deviceDetail.serialNumber), $search))",
            );
        }
        if filter.employee_id.is_some() {
            conditions.push("employeeId = $eid");
        }
        if filter.department.is_some() {
            conditions.push(
                "string::contains(string::lowercase(employeeSnapshot.department ?? ''), $department)",
            );
        }
        if filter.suitability.is_some() {
            conditions.push("deviceCondition.deviceSuitability = $suitability");
        }
        if filter.ownership.is_some() {
            conditions.push("deviceDetail.ownership = $ownership");
        }
        if filter.date_from.is_some() {
            conditions.push("checkDate >= $date_from");
        }
        if filter.date_to.is_some() {
            conditions.push("checkDate <= $date_to");
        }
        conditions
    }

    /// List checks with the full filter set, sorted and paginated.
    /// Returns the page plus the total match count.
    pub async fn find_page(
        &self,
        filter: &DeviceCheckListFilter,
    ) -> RepoResult<(Vec<DeviceCheck>, u64)> {
        let conditions = Self::filter_conditions(filter);
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let sort_by = filter
            .sort_by
            .as_deref()
            .filter(|s| SORTABLE.contains(s))
            .unwrap_or("checkDate");

        let query = format!(
            "SELECT * FROM device_check{} ORDER BY {} {} LIMIT $limit START $start",
            where_clause,
            sort_by,
            filter.sort_order.as_sql()
        );
        let count_query = format!("SELECT count() FROM device_check{} GROUP ALL", where_clause);

        let mut result = self
            .base
            .db()
            .query(query)
            .query(count_query)
            .bind(("search", filter.search.as_deref().map(str::to_lowercase)))
            .bind(("eid", filter.employee_id.clone()))
            .bind((
                "department",
                filter.department.as_deref().map(str::to_lowercase),
            ))
            .bind(("suitability", filter.suitability.clone()))
            .bind(("ownership", filter.ownership.clone()))
            .bind(("date_from", filter.date_from))
            .bind(("date_to", filter.date_to))
            .bind(("limit", filter.limit))
            .bind(("start", filter.start))
            .await?;

        let checks: Vec<DeviceCheck> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        Ok((checks, total))
    }

    /// Find device check by id ("device_check:xyz")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DeviceCheck>> {
        let thing = self.base.parse_id(TABLE, id)?;
        let check: Option<DeviceCheck> = self.base.db().select(thing).await?;
        Ok(check)
    }

    /// One employee's checks, newest ordinal first
    pub async fn find_by_employee(
        &self,
        employee_id: &str,
        limit: u64,
        start: u64,
    ) -> RepoResult<(Vec<DeviceCheck>, u64)> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM device_check WHERE employeeId = $eid \
                 ORDER BY checkDate DESC LIMIT $limit START $start",
            )
            .query("SELECT count() FROM device_check WHERE employeeId = $eid GROUP ALL")
            .bind(("eid", employee_id.to_string()))
            .bind(("limit", limit))
            .bind(("start", start))
            .await?;

        let checks: Vec<DeviceCheck> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        Ok((checks, total))
    }

    /// The employee's most recent checks, for the detail view
    pub async fn recent_for_employee(
        &self,
        employee_id: &str,
        limit: u64,
    ) -> RepoResult<Vec<DeviceCheck>> {
        let checks: Vec<DeviceCheck> = self
            .base
            .db()
            .query(
                "SELECT * FROM device_check WHERE employeeId = $eid \
                 ORDER BY checkDate DESC LIMIT $limit",
            )
            .bind(("eid", employee_id.to_string()))
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(checks)
    }

    /// Device type / ownership breakdown plus totals for one employee
    pub async fn summary(&self, employee_id: &str) -> RepoResult<CheckSummary> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM device_check WHERE employeeId = $eid GROUP ALL")
            .query(
                "SELECT checkDate FROM device_check WHERE employeeId = $eid \
                 ORDER BY checkDate DESC LIMIT 1",
            )
            .query(
                "SELECT deviceDetail.deviceType AS key, count() AS count \
                 FROM device_check WHERE employeeId = $eid GROUP BY key",
            )
            .query(
                "SELECT deviceDetail.ownership AS key, count() AS count \
                 FROM device_check WHERE employeeId = $eid GROUP BY key",
            )
            .bind(("eid", employee_id.to_string()))
            .await?;

        let counts: Vec<CountRow> = result.take(0)?;
        let latest: Vec<CheckDateRow> = result.take(1)?;
        let by_type: Vec<GroupRow> = result.take(2)?;
        let by_ownership: Vec<GroupRow> = result.take(3)?;

        Ok(CheckSummary {
            total_checks: counts.first().map(|c| c.count).unwrap_or(0),
            latest_check_date: latest.first().map(|r| r.check_date),
            device_types: by_type.into_iter().map(|r| (r.key, r.count)).collect(),
            ownership: by_ownership.into_iter().map(|r| (r.key, r.count)).collect(),
        })
    }

    /// Replace the mutable sections of a check. Identity fields
    /// (employeeId, snapshot, version) keep their stored values; the
    /// service layer has already rejected attempts to change them.
    pub async fn update(&self, id: &str, data: DeviceCheckUpdate) -> RepoResult<DeviceCheck> {
        let thing = self.base.parse_id(TABLE, id)?;
        let mut existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Device check {} not found", id)))?;

        existing.apply_update(data, Utc::now());
        existing.id = None;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing CONTENT $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", existing))
            .await?;

        result
            .take::<Option<DeviceCheck>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Device check {} not found", id)))
    }

    /// Delete a check and return the removed row, so the caller can
    /// refresh the owning employee's aggregates.
    pub async fn delete(&self, id: &str) -> RepoResult<DeviceCheck> {
        let thing = self.base.parse_id(TABLE, id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Device check {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;

        Ok(existing)
    }
}

//! Device Check API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{DeviceCheck, DeviceCheckCreate, DeviceCheckUpdate, Employee};
use crate::db::repository::device_check::{CheckSummary, DeviceCheckListFilter};
use crate::utils::{AppError, AppResult, validation::clamp_limit};
use shared::models::{DeviceSuitability, Ownership, Paginated, Pagination, SortOrder};

const MAX_PAGE_SIZE: u64 = 100;

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_page")]
    page: u64,
    #[serde(default = "default_limit")]
    limit: u64,
    search: Option<String>,
    employee_id: Option<String>,
    department: Option<String>,
    suitability: Option<DeviceSuitability>,
    ownership: Option<Ownership>,
    date_from: Option<DateTime<Utc>>,
    date_to: Option<DateTime<Utc>>,
    sort_by: Option<String>,
    #[serde(default)]
    sort_order: SortOrder,
}

#[derive(Debug, Deserialize)]
pub struct EmployeePageQuery {
    #[serde(default = "default_page")]
    page: u64,
    #[serde(default = "default_limit")]
    limit: u64,
}

/// One employee's check history with aggregate figures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeChecksResponse {
    pub employee: Employee,
    pub checks: Vec<DeviceCheck>,
    pub pagination: Pagination,
    pub summary: CheckSummary,
}

/// List device checks with the full filter set
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Paginated<DeviceCheck>>> {
    let page = query.page.max(1);
    let limit = clamp_limit(query.limit, MAX_PAGE_SIZE);

    let filter = DeviceCheckListFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
        employee_id: query.employee_id.filter(|s| !s.trim().is_empty()),
        department: query.department.filter(|d| !d.trim().is_empty()),
        suitability: query.suitability,
        ownership: query.ownership,
        date_from: query.date_from,
        date_to: query.date_to,
        sort_by: query.sort_by,
        sort_order: query.sort_order,
        limit,
        start: (page - 1) * limit,
    };

    let (checks, total) = state.checks.find_page(&filter).await?;
    Ok(Json(Paginated::new(checks, page, limit, total)))
}

/// Create a device check (snapshot + version assigned server-side)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DeviceCheckCreate>,
) -> AppResult<Json<DeviceCheck>> {
    let check = state.check_service.create_check(payload).await?;
    Ok(Json(check))
}

/// Get device check by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeviceCheck>> {
    let check = state
        .checks
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Device check {}", id)))?;
    Ok(Json(check))
}

/// One employee's checks plus their summary, newest first
pub async fn list_for_employee(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
    Query(query): Query<EmployeePageQuery>,
) -> AppResult<Json<EmployeeChecksResponse>> {
    let employee = state
        .employees
        .find_by_id(&employee_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {}", employee_id)))?;

    let page = query.page.max(1);
    let limit = clamp_limit(query.limit, MAX_PAGE_SIZE);

    let (checks, total) = state
        .checks
        .find_by_employee(&employee_id, limit, (page - 1) * limit)
        .await?;
    let summary = state.checks.summary(&employee_id).await?;

    Ok(Json(EmployeeChecksResponse {
        employee,
        checks,
        pagination: Pagination::new(page, limit, total),
        summary,
    }))
}

/// Update a device check. Changing employeeId or version is rejected.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DeviceCheckUpdate>,
) -> AppResult<Json<DeviceCheck>> {
    let check = state.check_service.update_check(&id, payload).await?;
    Ok(Json(check))
}

/// Delete a device check and refresh the owner's aggregates
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.check_service.delete_check(&id).await?;
    Ok(Json(true))
}

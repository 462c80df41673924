//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{DeviceCheck, Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::employee::{DeleteOutcome, EmployeeListFilter};
use crate::utils::{AppResult, validation::clamp_limit};
use shared::models::{EmployeeStatus, Paginated, SortOrder};

const MAX_PAGE_SIZE: u64 = 100;
/// Recent checks embedded in the detail view
const RECENT_CHECKS: u64 = 5;

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
    department: Option<String>,
    status: Option<EmployeeStatus>,
    sort_by: Option<String>,
    sort_order: Option<SortOrder>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
    status: Option<EmployeeStatus>,
    #[serde(default = "default_search_limit")]
    limit: u64,
}

fn default_search_limit() -> u64 {
    10
}

/// Employee with their most recent checks, for the detail view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub device_checks: Vec<DeviceCheck>,
}

/// Delete response: which path was taken, and the surviving row if any
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
}

/// List employees with filters and pagination
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Paginated<Employee>>> {
    let page = query.page.max(1);
    let limit = clamp_limit(query.limit, MAX_PAGE_SIZE);

    let filter = EmployeeListFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
        department: query.department.filter(|d| !d.trim().is_empty()),
        status: query.status,
        sort_by: query.sort_by,
        sort_order: query.sort_order.unwrap_or(SortOrder::Asc),
        limit,
        start: (page - 1) * limit,
    };

    let (employees, total) = state.employees.find_page(&filter).await?;
    Ok(Json(Paginated::new(employees, page, limit, total)))
}

/// Name autocomplete. Defaults to active employees only.
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    if query.q.trim().is_empty() {
        return Ok(Json(Vec::new()));
    }
    let status = query.status.or(Some(EmployeeStatus::Active));
    let limit = clamp_limit(query.limit, 50);

    let employees = state.employees.search(query.q.trim(), status, limit).await?;
    Ok(Json(employees))
}

/// Employee detail including their five most recent checks
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeDetail>> {
    let employee = state
        .employees
        .find_by_id(&id)
        .await?
        .ok_or_else(|| crate::utils::AppError::not_found(format!("Employee {}", id)))?;

    let device_checks = state.checks.recent_for_employee(&id, RECENT_CHECKS).await?;

    Ok(Json(EmployeeDetail {
        employee,
        device_checks,
    }))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.create(payload).await?;
    Ok(Json(employee))
}

/// Update an employee. Aggregate fields are not writable here.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.update(&id, payload).await?;
    Ok(Json(employee))
}

/// Delete an employee: soft when check history exists, hard otherwise
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let outcome = state.check_service.delete_employee(&id).await?;
    tracing::info!("Employee {} deleted ({})", id, outcome.describe());

    let response = match outcome {
        DeleteOutcome::Soft(employee) => DeleteResponse {
            deleted: "soft",
            employee: Some(employee),
        },
        DeleteOutcome::Hard => DeleteResponse {
            deleted: "hard",
            employee: None,
        },
    };
    Ok(Json(response))
}

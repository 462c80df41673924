//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use chrono::Utc;
use serde::Deserialize;
use shared::models::{EmployeeStatus, SortOrder};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "employee";

/// Sortable columns for employee listing. Anything else falls back to
/// fullName.
const SORTABLE: &[&str] = &[
    "fullName",
    "firstName",
    "lastName",
    "position",
    "department",
    "status",
    "totalDeviceChecks",
    "lastCheckDate",
    "createdAt",
];

/// Filters for the employee list endpoint
#[derive(Debug, Clone, Default)]
pub struct EmployeeListFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub limit: u64,
    pub start: u64,
}

/// Result of an employee delete request
#[derive(Debug, Clone)]
pub enum DeleteOutcome {
    /// Employee still has device checks; status flipped to Resigned
    Soft(Employee),
    /// No associated checks; row removed
    Hard,
}

impl DeleteOutcome {
    /// "soft" or "hard", for log lines and response bodies
    pub fn describe(&self) -> &'static str {
        match self {
            DeleteOutcome::Soft(_) => "soft",
            DeleteOutcome::Hard => "hard",
        }
    }
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn filter_conditions(filter: &EmployeeListFilter) -> Vec<&'static str> {
        let mut conditions = Vec::new();
        if filter.search.is_some() {
            conditions.push(
                "(string::contains(string::lowercase(fullName), $search) \
                 OR string::contains(string::lowercase(firstName), $search) \
                 OR string::contains(string::lowercase(lastName), $search))",
            );
        }
        if filter.department.is_some() {
            conditions.push("string::contains(string::lowercase(department ?? ''), $department)");
        }
        if filter.status.is_some() {
            conditions.push("status = $status");
        }
        conditions
    }

    /// List employees with search/department/status filters, sorted and
    /// paginated. Returns the page plus the total match count.
    pub async fn find_page(&self, filter: &EmployeeListFilter) -> RepoResult<(Vec<Employee>, u64)> {
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
            .unwrap_or("fullName");

        let query = format!(
            "SELECT * FROM employee{} ORDER BY {} {} LIMIT $limit START $start",
            where_clause,
            sort_by,
            filter.sort_order.as_sql()
        );
        let count_query = format!("SELECT count() FROM employee{} GROUP ALL", where_clause);

        let mut result = self
            .base
            .db()
            .query(query)
            .query(count_query)
            .bind(("search", filter.search.as_deref().map(str::to_lowercase)))
            .bind((
                "department",
                filter.department.as_deref().map(str::to_lowercase),
            ))
            .bind(("status", filter.status))
            .bind(("limit", filter.limit))
            .bind(("start", filter.start))
            .await?;

        let employees: Vec<Employee> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.first().map(|c| c.count).unwrap_or(0);

        Ok((employees, total))
    }

    /// Name search for the autocomplete widget, ranked alphabetically
    pub async fn search(
        &self,
        q: &str,
        status: Option<EmployeeStatus>,
        limit: u64,
    ) -> RepoResult<Vec<Employee>> {
        let mut conditions = vec![
            "(string::contains(string::lowercase(fullName), $q) \
             OR string::contains(string::lowercase(firstName), $q) \
             OR string::contains(string::lowercase(lastName), $q))",
        ];
        if status.is_some() {
            conditions.push("status = $status");
        }

        let query = format!(
            "SELECT * FROM employee WHERE {} ORDER BY fullName ASC LIMIT $limit",
            conditions.join(" AND ")
        );

        let employees: Vec<Employee> = self
            .base
            .db()
            .query(query)
            .bind(("q", q.to_lowercase()))
            .bind(("status", status))
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id ("employee:xyz")
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = self.base.parse_id(TABLE, id)?;
        let emp: Option<Employee> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Create a new employee with write-time normalization applied
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        if data.first_name.trim().is_empty()
            || data.last_name.trim().is_empty()
            || data.position.trim().is_empty()
        {
            return Err(RepoError::Validation(
                "First name, last name, and position are required".to_string(),
            ));
        }

        let row = data.into_row(Utc::now());

        let mut result = self
            .base
            .db()
            .query("CREATE employee CONTENT $data RETURN AFTER")
            .bind(("data", row))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee. Aggregate fields keep their stored values;
    /// only [`refresh_check_stats`](Self::refresh_check_stats) writes them.
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = self.base.parse_id(TABLE, id)?;
        let mut existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

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
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Recompute totalDeviceChecks and lastCheckDate from the current
    /// device_check set. This is the only write path for the aggregate
    /// fields and touches nothing else on the row.
    pub async fn refresh_check_stats(&self, id: &str) -> RepoResult<Employee> {
        let thing = self.base.parse_id(TABLE, id)?;

        let mut result = self
            .base
            .db()
            .query(
                r#"
                LET $total = ((SELECT count() FROM device_check WHERE employeeId = $eid GROUP ALL)[0].count) ?? 0;
                LET $last = (SELECT checkDate FROM device_check WHERE employeeId = $eid ORDER BY checkDate DESC LIMIT 1)[0].checkDate;
                UPDATE $thing SET totalDeviceChecks = $total, lastCheckDate = $last, updatedAt = $now RETURN AFTER;
                "#,
            )
            .bind(("eid", id.to_string()))
            .bind(("thing", thing))
            .bind(("now", Utc::now()))
            .await?;

        result
            .take::<Option<Employee>>(2)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Delete an employee, branching on associated checks inside one
    /// transaction: soft delete (status -> Resigned) when checks exist,
    /// hard delete otherwise.
    ///
    /// The branch result is not read out of the transaction (an `IF`
    /// statement inside BEGIN/COMMIT reports NONE even when a branch
    /// runs); the outcome is observed by re-reading the row afterwards.
    pub async fn delete(&self, id: &str) -> RepoResult<DeleteOutcome> {
        let thing = self.base.parse_id(TABLE, id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $cnt = ((SELECT count() FROM device_check WHERE employeeId = $eid GROUP ALL)[0].count) ?? 0;
                IF $cnt > 0 {
                    UPDATE $thing SET status = 'Resigned', updatedAt = $now
                } ELSE {
                    DELETE $thing
                };
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("eid", id.to_string()))
            .bind(("thing", thing))
            .bind(("now", Utc::now()))
            .await?
            .check()?;

        match self.find_by_id(id).await? {
            Some(employee) => Ok(DeleteOutcome::Soft(employee)),
            None => Ok(DeleteOutcome::Hard),
        }
    }
}

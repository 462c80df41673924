//! Dropdown Option Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::DropdownOption;
use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct DropdownOptionRepository {
    base: BaseRepository,
}

impl DropdownOptionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Suggestions for one field, most-used first, ties broken
    /// alphabetically
    pub async fn find_options(
        &self,
        field_name: &str,
        category: Option<&str>,
        limit: u64,
    ) -> RepoResult<Vec<DropdownOption>> {
        let mut conditions = vec!["fieldName = $field"];
        if category.is_some() {
            conditions.push("category = $category");
        }

        let query = format!(
            "SELECT * FROM dropdown_option WHERE {} \
             ORDER BY usageCount DESC, value ASC LIMIT $limit",
            conditions.join(" AND ")
        );

        let options: Vec<DropdownOption> = self
            .base
            .db()
            .query(query)
            .bind(("field", field_name.to_string()))
            .bind(("category", category.map(str::to_string)))
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(options)
    }

    /// Record one usage of a (fieldName, value) pair: bump the counter
    /// if it exists, create it otherwise. Values are trimmed and
    /// upper-cased so "lenovo" and "Lenovo " land on the same row.
    pub async fn upsert(
        &self,
        field_name: &str,
        value: &str,
        category: Option<&str>,
    ) -> RepoResult<DropdownOption> {
        let field_name = field_name.trim().to_string();
        let value = value.trim().to_uppercase();
        if field_name.is_empty() || value.is_empty() {
            return Err(RepoError::Validation(
                "Field name and value are required".to_string(),
            ));
        }

        let now = Utc::now();
        let row = DropdownOption {
            id: None,
            field_name: field_name.clone(),
            category: category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            value: value.clone(),
            usage_count: 1,
            last_used_at: now,
            created_at: now,
            updated_at: now,
        };

        // The IF statement's result is not readable from inside a
        // BEGIN/COMMIT transaction (it reports NONE even when a branch
        // runs), so the saved row is re-selected after the commit.
        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $existing = (SELECT * FROM dropdown_option WHERE fieldName = $field AND value = $value LIMIT 1)[0];
                IF $existing {
                    UPDATE $existing.id SET usageCount += 1, lastUsedAt = $now, updatedAt = $now
                } ELSE {
                    CREATE dropdown_option CONTENT $data
                };
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("field", field_name.clone()))
            .bind(("value", value.clone()))
            .bind(("now", now))
            .bind(("data", row))
            .await?
            .check()?;

        let saved: Option<DropdownOption> = self
            .base
            .db()
            .query("SELECT * FROM dropdown_option WHERE fieldName = $field AND value = $value LIMIT 1")
            .bind(("field", field_name))
            .bind(("value", value))
            .await?
            .take(0)?;

        saved.ok_or_else(|| RepoError::Database("Failed to save dropdown option".to_string()))
    }
}

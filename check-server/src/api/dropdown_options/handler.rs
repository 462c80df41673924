//! Dropdown Option API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{DropdownOption, DropdownOptionSave};
use crate::utils::{
    AppResult,
    validation::{clamp_limit, require_non_empty},
};

fn default_limit() -> u64 {
    50
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    field_name: String,
    category: Option<String>,
    #[serde(default = "default_limit")]
    limit: u64,
}

/// Suggestions for one form field, most-used first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<DropdownOption>>> {
    require_non_empty("fieldName", &query.field_name)?;
    let limit = clamp_limit(query.limit, 100);

    let options = state
        .options
        .find_options(
            query.field_name.trim(),
            query.category.as_deref().filter(|c| !c.trim().is_empty()),
            limit,
        )
        .await?;
    Ok(Json(options))
}

/// Record one usage of a (fieldName, value) pair
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<DropdownOptionSave>,
) -> AppResult<Json<DropdownOption>> {
    let option = state
        .options
        .upsert(
            &payload.field_name,
            &payload.value,
            payload.category.as_deref(),
        )
        .await?;
    Ok(Json(option))
}

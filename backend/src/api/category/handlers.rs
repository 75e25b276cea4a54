//! Handler functions for the category API.
//!
//! These functions serve the category listing and the per-category
//! question pages, resolving rows through `database::queries` and
//! shaping them into the standard success envelope.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::database::queries;
use crate::errors::ApiError;
use crate::utils::{self, PageQuery};

/// `GET /categories` returns every category as an `{id: type}` map.
///
/// An empty category table is a 404, matching the listing contract.
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, ApiError> {
    let categories = queries::all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": utils::category_map(&categories),
    })))
}

/// `GET /categories/{id}/questions` serves one category's questions, paginated.
///
/// The id must parse as an integer and name an existing category; both
/// failures are a 400. `total_questions` deliberately counts every
/// question in the store, not just this category's.
pub async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let id: i64 = raw_id.parse().map_err(|_| ApiError::BadRequest)?;

    let category = queries::category_by_id(&pool, id)
        .await?
        .ok_or(ApiError::BadRequest)?;

    let selection = queries::questions_by_category(&pool, category.id).await?;
    let paginated = utils::paginate(&selection, page.number());
    let total_questions = queries::count_questions(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": paginated,
        "total_questions": total_questions,
        "current_category": category.kind,
    })))
}

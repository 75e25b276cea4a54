//! Handler functions for the question API.
//!
//! These functions process the paginated listing, creation, deletion,
//! and substring search of trivia questions, and fold store failures
//! into the endpoint's documented status code.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::database::queries;
use crate::errors::ApiError;
use crate::utils::{self, PageQuery};

/// Body of `POST /questions`. Every field is optional at this layer;
/// the store's NOT NULL constraints decide what an incomplete body
/// means.
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    pub search: Option<String>,
}

/// `GET /questions?page=N` serves the page-N window over all
/// questions, plus the category map. An empty window (out-of-range
/// page included) is a 404.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let selection = queries::all_questions(&pool).await?;
    let total_questions = selection.len();
    let current = utils::paginate(&selection, page.number());

    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = queries::all_categories(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": total_questions,
        "categories": utils::category_map(&categories),
    })))
}

/// `DELETE /questions/{id}` removes one question.
///
/// A malformed id, a missing row, and a failed delete all fold into
/// 404; the fold is deliberate and check-then-act rather than a broad
/// catch.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id: i64 = raw_id.parse().map_err(|_| ApiError::NotFound)?;

    queries::question_by_id(&pool, id)
        .await
        .map_err(|_| ApiError::NotFound)?
        .ok_or(ApiError::NotFound)?;

    queries::delete_question(&pool, id)
        .await
        .map_err(|err| {
            tracing::warn!(id, error = %err, "question delete failed");
            ApiError::NotFound
        })?;

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

/// `POST /questions?page=N` inserts a question and echoes back the
/// current page of the refreshed listing.
///
/// Any insert rejection (incomplete body included) is a 422. The
/// insert and the re-fetch are two independent store calls with no
/// transaction spanning them.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
    body: Option<Json<NewQuestion>>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.ok_or(ApiError::Unprocessable)?;

    let created = queries::insert_question(
        &pool,
        body.question.as_deref(),
        body.answer.as_deref(),
        body.category,
        body.difficulty,
    )
    .await
    .map_err(|err| {
        tracing::warn!(error = %err, "question insert rejected");
        ApiError::Unprocessable
    })?;

    let selection = queries::all_questions(&pool).await?;
    let current = utils::paginate(&selection, page.number());

    Ok(Json(json!({
        "success": true,
        "created": created,
        "questions": current,
        "total_questions": selection.len(),
    })))
}

/// `POST /questions/search?page=N` runs a case-insensitive substring
/// match against the question text.
///
/// An absent or empty `search` value is a 422. No matches is still a
/// success, with an empty page. For a non-empty page,
/// `total_questions` reports the size of the returned page (not the
/// full match count) and `current_category` is the category of the
/// page's first question; both reproduce the documented contract.
pub async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
    body: Option<Json<SearchBody>>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.ok_or(ApiError::Unprocessable)?;
    let term = match body.search {
        Some(term) if !term.is_empty() => term,
        _ => return Err(ApiError::Unprocessable),
    };

    let selection = queries::search_questions(&pool, &term)
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    if selection.is_empty() {
        return Ok(Json(json!({
            "success": true,
            "questions": [],
            "total_questions": 0,
            "current_category": "",
        })));
    }

    let current = utils::paginate(&selection, page.number());
    let categories = queries::all_categories(&pool)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    let current_category = current
        .first()
        .map(|question| utils::category_type(&categories, question.category))
        .unwrap_or_default();

    Ok(Json(json!({
        "success": true,
        "total_questions": current.len(),
        "questions": current,
        "current_category": current_category,
    })))
}

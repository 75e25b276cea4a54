//! Handler functions for the quiz API.
//!
//! These functions draw the next unseen question for a quiz round and
//! echo back the updated list of seen ids.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::database::queries;
use crate::errors::ApiError;

/// Sentinel category id meaning "no category filter".
const ALL_CATEGORIES: i64 = 0;

/// Body of `POST /quizzes`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

/// The category selector sent by the client. Only the id matters; any
/// display name riding along is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

/// `POST /quizzes` draws the first question by id not yet seen,
/// restricted to `quiz_category.id` unless it is the all-categories
/// sentinel 0.
///
/// An absent `quiz_category` is a 422. A null `previous_questions`
/// defaults to the empty list before any use. Running out of
/// candidates is a success with `question: null`, never an error.
pub async fn next_question(
    State(pool): State<SqlitePool>,
    body: Option<Json<QuizRequest>>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.ok_or(ApiError::Unprocessable)?;
    let quiz_category = body.quiz_category.ok_or(ApiError::Unprocessable)?;
    let mut previous = body.previous_questions.unwrap_or_default();

    let filter = if quiz_category.id == ALL_CATEGORIES {
        None
    } else {
        Some(quiz_category.id)
    };

    let question = queries::next_quiz_question(&pool, &previous, filter)
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    if let Some(question) = &question {
        previous.push(question.id);
    }

    Ok(Json(json!({
        "success": true,
        "previous_questions": previous,
        "question": question,
    })))
}

//! Defines the HTTP route for the quiz API.

use axum::routing::post;
use axum::Router;
use sqlx::SqlitePool;

use super::handlers::next_question;

pub fn quiz_router() -> Router<SqlitePool> {
    Router::new().route("/quizzes", post(next_question))
}

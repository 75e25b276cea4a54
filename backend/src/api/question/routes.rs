//! Defines the HTTP routes for the question API.
//!
//! These routes map question paths to the handler functions for the
//! paginated listing, creation, deletion, and substring search.

use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::SqlitePool;

use super::handlers;

pub fn question_router() -> Router<SqlitePool> {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/:id", delete(handlers::delete_question))
        .route("/questions/search", post(handlers::search_questions))
}

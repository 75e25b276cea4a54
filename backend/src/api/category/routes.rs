//! Defines the HTTP routes for the category API.
//!
//! These routes map category paths to the handler functions that list
//! all categories and serve per-category question pages.

use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;

use super::handlers::{list_categories, questions_by_category};

pub fn category_router() -> Router<SqlitePool> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(questions_by_category))
}

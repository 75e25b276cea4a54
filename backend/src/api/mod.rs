//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the category, question,
//! and quiz domains, and assembles them into the application router with
//! CORS and request tracing applied.

pub mod category;
pub mod question;
pub mod quiz;

use axum::http::{header, Method};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the full application router over an injected store pool.
pub fn router(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS]);

    Router::new()
        .merge(category::routes::category_router())
        .merge(question::routes::question_router())
        .merge(quiz::routes::quiz_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

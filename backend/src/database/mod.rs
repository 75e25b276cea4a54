//! Module for database connection setup and common utilities.
//!
//! This module is responsible for initializing the SQLite connection pool
//! and bootstrapping the trivia schema on first run.

pub mod models;
pub mod queries;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Opens a connection pool against the configured database URL.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Creates the `categories` and `questions` tables if they do not exist.
///
/// `questions` carries NOT NULL on every payload column; a create request
/// with an absent field is rejected by the store itself, not by handler
/// validation.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id   INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            question   TEXT NOT NULL,
            answer     TEXT NOT NULL,
            category   INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

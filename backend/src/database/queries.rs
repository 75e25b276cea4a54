//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations, providing
//! reusable functions for interacting with the trivia tables and
//! abstracting the query logic from the API handlers.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::models::{Category, Question};

/// All categories, ordered by id.
pub async fn all_categories(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

/// A single category, or `None` when the id is unknown.
pub async fn category_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All questions, ordered by id.
pub async fn all_questions(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Total number of question rows, across every category.
pub async fn count_questions(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
}

/// A single question, or `None` when the id is unknown.
pub async fn question_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All questions in one category, ordered by id.
pub async fn questions_by_category(
    pool: &SqlitePool,
    category: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE category = ?1 ORDER BY id",
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match against the question text, ordered
/// by id. SQLite's `LIKE` is case-insensitive for ASCII, matching the
/// `ilike` semantics this endpoint promises.
pub async fn search_questions(
    pool: &SqlitePool,
    term: &str,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE question LIKE '%' || ?1 || '%' ORDER BY id",
    )
    .bind(term)
    .fetch_all(pool)
    .await
}

/// Inserts a question and returns the store-assigned id.
///
/// Absent fields are bound as NULL on purpose; the schema's NOT NULL
/// constraints decide whether the insert goes through.
pub async fn insert_question(
    pool: &SqlitePool,
    question: Option<&str>,
    answer: Option<&str>,
    category: Option<i64>,
    difficulty: Option<i64>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) \
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Deletes a question by id, returning the number of rows removed.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// The first question by id not in `previous`, optionally restricted to
/// one category. Returns `None` when every candidate has been seen.
pub async fn next_quiz_question(
    pool: &SqlitePool,
    previous: &[i64],
    category: Option<i64>,
) -> Result<Option<Question>, sqlx::Error> {
    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE 1 = 1",
    );

    if let Some(category) = category {
        builder.push(" AND category = ").push_bind(category);
    }

    if !previous.is_empty() {
        builder.push(" AND id NOT IN (");
        {
            let mut ids = builder.separated(", ");
            for id in previous {
                ids.push_bind(*id);
            }
        }
        builder.push(")");
    }

    builder.push(" ORDER BY id LIMIT 1");

    builder
        .build_query_as::<Question>()
        .fetch_optional(pool)
        .await
}

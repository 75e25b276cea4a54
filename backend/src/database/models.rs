//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and
//! retrieved from the database. Their serde serialization is also the
//! wire format: a serialized row is exactly the field mapping the API
//! returns for it.

use serde::Serialize;
use sqlx::FromRow;

/// A trivia question row.
///
/// `category` references `Category::id` by convention only; no handler
/// validates the reference (the store's own constraints apply, if any).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A category row. Read-only from this backend's perspective.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: i64,
    /// Display name, stored and serialized as `type`.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

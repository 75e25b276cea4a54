//! Shared request helpers for the API handlers.
//!
//! Pagination over ordered result lists, category-name resolution, and
//! the lenient `?page=N` query parameter shared by several endpoints.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::database::models::Category;

/// Fixed page size for every paginated endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// The `?page=N` query parameter. Kept as a raw string so that a
/// non-numeric value falls back to page 1 instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// The requested page, defaulting to 1 when absent or unparseable.
    pub fn number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(1)
    }
}

/// The 1-based page-`page` window of `items`, ten entries wide.
///
/// Out-of-range pages produce an empty slice rather than an error, and
/// so does any page below 1. The start index is computed with checked
/// arithmetic so that a huge page number cannot overflow.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = match usize::try_from(page - 1)
        .ok()
        .and_then(|offset| offset.checked_mul(QUESTIONS_PER_PAGE))
    {
        Some(start) => start,
        None => return Vec::new(),
    };
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

/// Resolves a category's display name from an already-fetched list.
///
/// Linear scan, O(categories) per call; fine at this data scale.
/// Returns the empty string when the id has no match.
pub fn category_type(categories: &[Category], id: i64) -> String {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.kind.clone())
        .unwrap_or_default()
}

/// Builds the `{id: type}` mapping several endpoints return.
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}

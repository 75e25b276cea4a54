//! Global application error types and handlers.
//!
//! This module defines the error taxonomy used across the entire backend
//! and converts each error into the standard JSON failure envelope
//! `{success: false, error: <code>, message: <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failure modes a handler can surface to a client.
///
/// The `Display` strings double as the fixed, user-visible `message`
/// field; nothing store-internal is ever echoed back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("resource not found")]
    NotFound,
    #[error("unprocessable")]
    Unprocessable,
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Read-path default: a missing row is 404, anything else a 500.
/// Write paths override this with an explicit `map_err` where the
/// endpoint contract calls for 422.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            other => {
                tracing::error!(error = %other, "unexpected store failure");
                ApiError::Internal
            }
        }
    }
}

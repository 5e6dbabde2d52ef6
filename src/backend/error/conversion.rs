/**
 * Error Conversion
 *
 * This module is the centralized error responder: every `BackendError`
 * returned from a handler, extractor or middleware passes through the
 * `IntoResponse` implementation below.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Server errors are logged with their full detail before being reduced
    /// to a generic message; client errors are returned as-is.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, message);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Whether a sqlx error is a UNIQUE constraint violation
///
/// Used where a duplicate check raced with a concurrent insert and the
/// database constraint caught it instead.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.is_unique_violation(),
        _ => false,
    }
}

/// Name of the column a UNIQUE violation tripped on, if the driver says
///
/// SQLite reports violations as `UNIQUE constraint failed: table.column`.
pub fn unique_violation_column(error: &sqlx::Error) -> Option<String> {
    match error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => db_error
            .message()
            .rsplit('.')
            .next()
            .map(|column| column.trim().to_string()),
        _ => None,
    }
}

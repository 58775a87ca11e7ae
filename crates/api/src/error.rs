use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fertiflow_core::error::CoreError;
use fertiflow_db::storage::StorageError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StorageError`] for persistence
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fertiflow_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the storage backend.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                // 401 carries no body; the reason only goes to the log.
                CoreError::Unauthorized(msg) => {
                    tracing::debug!(reason = %msg, "Rejected unauthenticated request");
                    return StatusCode::UNAUTHORIZED.into_response();
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Storage errors ---
            AppError::Storage(err) => classify_storage_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a storage error into an HTTP status, error code, and message.
///
/// - Uniqueness violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_storage_error(err: &StorageError) -> (StatusCode, &'static str, String) {
    match err {
        StorageError::Conflict { .. } => (StatusCode::CONFLICT, "CONFLICT", err.to_string()),
        StorageError::Database(db_err) => {
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
    }
}

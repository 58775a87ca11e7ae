pub mod auth;
pub mod demand_requests;
pub mod production_data;
pub mod production_plans;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Unwrap and validate a JSON request body.
///
/// Malformed JSON, `validator` length rules and the entity's own `rules` all
/// collapse into one 400 carrying `message`. The specific reason is only
/// logged at debug level.
pub(crate) fn accept_body<T, F>(
    body: Result<Json<T>, JsonRejection>,
    message: &'static str,
    rules: F,
) -> AppResult<T>
where
    T: Validate,
    F: FnOnce(&T) -> Result<(), String>,
{
    let reject = |reason: String| {
        tracing::debug!(%reason, "Rejected request body");
        AppError::BadRequest(message.to_string())
    };

    let Json(input) = body.map_err(|rejection| reject(rejection.body_text()))?;
    input.validate().map_err(|errors| reject(errors.to_string()))?;
    rules(&input).map_err(reject)?;
    Ok(input)
}

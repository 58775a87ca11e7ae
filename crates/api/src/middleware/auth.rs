//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use fertiflow_core::error::CoreError;
use fertiflow_core::types::DbId;

use crate::auth::session::{hash_session_token, token_from_cookie_header};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `fertiflow.sid` cookie or an
/// `Authorization: Bearer` header carrying the same token.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user_id, role = %auth.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Extraction fails with 401 unless the session exists, is not revoked, has
/// not expired, and belongs to an active user.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub username: String,
    /// Role name, e.g. `"Procurement Officer"`.
    pub role: String,
    /// The session that authenticated this request (revoked on logout).
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers)
            .ok_or_else(|| unauthorized("Missing session cookie or bearer token"))?;

        let session = state
            .storage
            .find_active_session(&hash_session_token(token))
            .await?
            .ok_or_else(|| unauthorized("Invalid, revoked or expired session"))?;

        let user = state
            .storage
            .get_user(session.user_id)
            .await?
            .ok_or_else(|| unauthorized("Session user no longer exists"))?;

        if !user.is_active {
            return Err(unauthorized("Session user is deactivated"));
        }

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
            role: user.role,
            session_id: session.id,
        })
    }
}

fn unauthorized(reason: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(reason.into()))
}

/// Session token from the cookie, falling back to a bearer header.
fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(token_from_cookie_header)
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(str::trim)
                .filter(|t| !t.is_empty())
        })
}

//! Handlers for registration, login, logout and the current user.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use chrono::Utc;
use fertiflow_core::error::CoreError;
use fertiflow_core::roles::validate_role;
use fertiflow_core::types::DbId;
use fertiflow_db::models::session::CreateSession;
use fertiflow_db::models::user::{CreateUser, UserResponse};
use fertiflow_db::storage::StorageError;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::session::{clear_session_cookie, generate_session_token, session_cookie};
use crate::error::{AppError, AppResult};
use crate::handlers::accept_body;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    pub password: String,
    pub role: String,
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[validate(email)]
    pub email: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// A response that also installs or clears the session cookie.
type WithCookie<T> = (StatusCode, [(HeaderName, String); 1], T);

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Create an account and sign it in. An existing username is a 400.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<WithCookie<Json<UserResponse>>> {
    let input = accept_body(body, "Invalid registration data", |input: &RegisterRequest| {
        validate_password_strength(&input.password)?;
        validate_role(&input.role)
    })?;

    if state
        .storage
        .get_user_by_username(&input.username)
        .await?
        .is_some()
    {
        return Err(username_taken());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = state
        .storage
        .create_user(&CreateUser {
            username: input.username,
            password_hash,
            role: input.role,
            full_name: input.full_name,
            email: input.email,
        })
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent registration.
            StorageError::Conflict { .. } => username_taken(),
            other => other.into(),
        })?;

    let cookie = open_session(&state, user.id).await?;
    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(user.into()),
    ))
}

/// POST /api/login
///
/// Unknown username and wrong password are both 401. A deactivated account
/// with the right password is 403.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<WithCookie<Json<UserResponse>>> {
    let input = accept_body(body, "Invalid login data", |_: &LoginRequest| Ok(()))?;

    let invalid_credentials =
        || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let user = state
        .storage
        .get_user_by_username(&input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let cookie = open_session(&state, user.id).await?;
    tracing::info!(user_id = %user.id, "User logged in");

    Ok((StatusCode::OK, [(SET_COOKIE, cookie)], Json(user.into())))
}

/// POST /api/logout
///
/// Revoke the session that authenticated this request and clear the cookie.
pub async fn logout(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<WithCookie<()>> {
    state.storage.revoke_session(auth.session_id).await?;
    tracing::info!(
        user_id = %auth.user_id,
        username = %auth.username,
        session_id = %auth.session_id,
        "User logged out"
    );

    Ok((
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_session_cookie(&state.config.session))],
        (),
    ))
}

/// GET /api/user
pub async fn current_user(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .storage
        .get_user(auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(user.into()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn username_taken() -> AppError {
    AppError::BadRequest("Username already exists".into())
}

/// Persist a new session for `user_id` and return its `Set-Cookie` value.
async fn open_session(state: &AppState, user_id: DbId) -> AppResult<String> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + state.config.session.ttl();

    state
        .storage
        .create_session(&CreateSession {
            user_id,
            token_hash,
            expires_at,
        })
        .await?;

    Ok(session_cookie(&token, &state.config.session))
}

//! Route definitions for session authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes, merged directly into `/api`.
///
/// ```text
/// POST /register  -> register
/// POST /login     -> login
/// POST /logout    -> logout (requires auth)
/// GET  /user      -> current_user (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
}

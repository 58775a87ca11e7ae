pub mod auth;
pub mod demand_requests;
pub mod health;
pub mod production_data;
pub mod production_plans;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                         register (public)
/// /login                            login (public)
/// /logout                           logout (requires auth)
/// /user                             current user (requires auth)
///
/// /demand-requests                  list, create
/// /demand-requests/{id}             partial update
/// /production-plans                 list, create
/// /production-data                  list, create
/// ```
///
/// Every business route requires a session.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/demand-requests", demand_requests::router())
        .nest("/production-plans", production_plans::router())
        .nest("/production-data", production_data::router())
}

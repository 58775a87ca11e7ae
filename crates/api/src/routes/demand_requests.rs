use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::demand_requests;
use crate::state::AppState;

/// Routes mounted at `/demand-requests`.
///
/// ```text
/// GET   /       -> list_demand_requests
/// POST  /       -> create_demand_request
/// PATCH /{id}   -> update_demand_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(demand_requests::list_demand_requests)
                .post(demand_requests::create_demand_request),
        )
        .route("/{id}", patch(demand_requests::update_demand_request))
}

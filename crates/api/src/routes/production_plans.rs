use axum::routing::get;
use axum::Router;

use crate::handlers::production_plans;
use crate::state::AppState;

/// Routes mounted at `/production-plans`.
///
/// ```text
/// GET  /  -> list_production_plans
/// POST /  -> create_production_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(production_plans::list_production_plans)
            .post(production_plans::create_production_plan),
    )
}

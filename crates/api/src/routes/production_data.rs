use axum::routing::get;
use axum::Router;

use crate::handlers::production_data;
use crate::state::AppState;

/// Routes mounted at `/production-data`.
///
/// ```text
/// GET  /  -> list_production_data
/// POST /  -> create_production_data
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(production_data::list_production_data)
            .post(production_data::create_production_data),
    )
}

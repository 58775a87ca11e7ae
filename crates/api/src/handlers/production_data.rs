//! Handlers for the append-only `/production-data` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fertiflow_core::production_data::{validate_factory_status, validate_production_figures};
use fertiflow_db::models::production_data::{CreateProductionData, ProductionData};

use crate::error::AppResult;
use crate::handlers::accept_body;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/production-data
pub async fn list_production_data(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductionData>>> {
    let rows = state.storage.get_production_data().await?;
    Ok(Json(rows))
}

/// POST /api/production-data
///
/// `productionDate` is stamped by the server.
pub async fn create_production_data(
    auth: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateProductionData>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductionData>)> {
    let input = accept_body(body, "Invalid production data", |input: &CreateProductionData| {
        validate_production_figures(
            input.daily_production,
            input.target_production,
            input.efficiency_rate,
        )?;
        input.status.as_deref().map_or(Ok(()), validate_factory_status)
    })?;

    let row = state.storage.create_production_data(&input).await?;

    tracing::info!(
        id = %row.id,
        factory = %row.factory_name,
        user_id = %auth.user_id,
        username = %auth.username,
        role = %auth.role,
        "Production data recorded"
    );

    Ok((StatusCode::CREATED, Json(row)))
}

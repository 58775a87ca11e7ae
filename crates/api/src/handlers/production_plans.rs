//! Handlers for the `/production-plans` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fertiflow_core::production_plan::{validate_plan_status, validate_plan_year};
use fertiflow_db::models::production_plan::{CreateProductionPlan, ProductionPlan};

use crate::error::AppResult;
use crate::handlers::accept_body;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/production-plans
pub async fn list_production_plans(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductionPlan>>> {
    let plans = state.storage.get_production_plans().await?;
    Ok(Json(plans))
}

/// POST /api/production-plans
pub async fn create_production_plan(
    auth: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateProductionPlan>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductionPlan>)> {
    let input = accept_body(
        body,
        "Invalid production plan data",
        |input: &CreateProductionPlan| {
            validate_plan_year(input.plan_year)?;
            input.status.as_deref().map_or(Ok(()), validate_plan_status)
        },
    )?;

    let plan = state
        .storage
        .create_production_plan(auth.user_id, &input)
        .await?;

    tracing::info!(
        id = %plan.id,
        plan_year = plan.plan_year,
        user_id = %auth.user_id,
        username = %auth.username,
        role = %auth.role,
        "Production plan created"
    );

    Ok((StatusCode::CREATED, Json(plan)))
}

//! Handlers for the `/demand-requests` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fertiflow_core::demand::{validate_demand_quantity, validate_demand_status};
use fertiflow_core::error::CoreError;
use fertiflow_core::types::DbId;
use fertiflow_db::models::demand_request::{
    CreateDemandRequest, DemandRequest, UpdateDemandRequest,
};

use crate::error::{AppError, AppResult};
use crate::handlers::accept_body;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const INVALID_DATA: &str = "Invalid demand request data";

/// GET /api/demand-requests
pub async fn list_demand_requests(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DemandRequest>>> {
    let rows = state.storage.get_demand_requests().await?;
    Ok(Json(rows))
}

/// POST /api/demand-requests
///
/// `requestedBy` is the authenticated user. Returns 409 if `requestId` is
/// already taken.
pub async fn create_demand_request(
    auth: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateDemandRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DemandRequest>)> {
    let input = accept_body(body, INVALID_DATA, |input: &CreateDemandRequest| {
        validate_demand_quantity(input.quantity)?;
        input.status.as_deref().map_or(Ok(()), validate_demand_status)
    })?;

    let row = state
        .storage
        .create_demand_request(auth.user_id, &input)
        .await?;

    tracing::info!(
        id = %row.id,
        request_id = %row.request_id,
        user_id = %auth.user_id,
        username = %auth.username,
        role = %auth.role,
        "Demand request created"
    );

    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/demand-requests/{id}
///
/// Applies only the supplied fields. An id that does not parse as a UUID
/// cannot match a row and is reported as 404 like any other unknown id.
pub async fn update_demand_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateDemandRequest>, JsonRejection>,
) -> AppResult<Json<DemandRequest>> {
    let input = accept_body(body, INVALID_DATA, |input: &UpdateDemandRequest| {
        if let Some(quantity) = input.quantity {
            validate_demand_quantity(quantity)?;
        }
        input.status.as_deref().map_or(Ok(()), validate_demand_status)
    })?;

    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "DemandRequest",
            id: id.clone(),
        })
    };

    let row_id = DbId::parse_str(&id).map_err(|_| not_found())?;
    let row = state
        .storage
        .update_demand_request(row_id, &input)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(
        id = %row.id,
        status = %row.status,
        user_id = %auth.user_id,
        username = %auth.username,
        role = %auth.role,
        "Demand request updated"
    );

    Ok(Json(row))
}

//! Demand request model and DTOs.

use fertiflow_core::types::{Amount, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `demand_requests` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DemandRequest {
    pub id: DbId,
    pub request_id: String,
    pub region: String,
    pub fertilizer_type: String,
    pub quantity: Amount,
    pub status: String,
    pub requested_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a demand request. `requested_by` comes from the session.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDemandRequest {
    #[validate(length(min = 1, max = 64))]
    pub request_id: String,
    #[validate(length(min = 1, max = 100))]
    pub region: String,
    #[validate(length(min = 1, max = 100))]
    pub fertilizer_type: String,
    pub quantity: Amount,
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
}

/// DTO for partially updating a demand request. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDemandRequest {
    #[validate(length(min = 1, max = 64))]
    pub request_id: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub region: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub fertilizer_type: Option<String>,
    pub quantity: Option<Amount>,
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
}

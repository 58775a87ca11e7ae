//! Production plan model and DTOs.

use fertiflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `production_plans` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlan {
    pub id: DbId,
    pub plan_name: String,
    pub plan_year: i32,
    pub plan_type: String,
    pub description: Option<String>,
    pub status: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a production plan. `created_by` comes from the session.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductionPlan {
    #[validate(length(min = 1, max = 200))]
    pub plan_name: String,
    pub plan_year: i32,
    #[validate(length(min = 1, max = 100))]
    pub plan_type: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
}

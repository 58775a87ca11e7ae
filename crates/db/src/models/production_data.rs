//! Production observation model and DTO. Rows are never updated.

use fertiflow_core::types::{Amount, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `production_data` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductionData {
    pub id: DbId,
    pub factory_name: String,
    pub fertilizer_type: String,
    pub daily_production: Amount,
    pub target_production: Amount,
    pub efficiency_rate: Amount,
    pub status: String,
    pub production_date: Timestamp,
}

/// DTO for recording a production observation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductionData {
    #[validate(length(min = 1, max = 200))]
    pub factory_name: String,
    #[validate(length(min = 1, max = 100))]
    pub fertilizer_type: String,
    pub daily_production: Amount,
    pub target_production: Amount,
    pub efficiency_rate: Amount,
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
}

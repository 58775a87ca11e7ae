//! Repository for the append-only `production_data` table.

use fertiflow_core::production_data::DEFAULT_FACTORY_STATUS;
use sqlx::PgPool;

use crate::models::production_data::{CreateProductionData, ProductionData};

const COLUMNS: &str = "id, factory_name, fertilizer_type, daily_production, \
                       target_production, efficiency_rate, status, production_date";

/// Provides insert and list operations for production observations.
pub struct ProductionDataRepo;

impl ProductionDataRepo {
    /// Record a production observation stamped with the current time.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductionData,
    ) -> Result<ProductionData, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or(DEFAULT_FACTORY_STATUS);
        let query = format!(
            "INSERT INTO production_data
                (factory_name, fertilizer_type, daily_production, target_production,
                 efficiency_rate, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionData>(&query)
            .bind(&input.factory_name)
            .bind(&input.fertilizer_type)
            .bind(input.daily_production)
            .bind(input.target_production)
            .bind(input.efficiency_rate)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// List all observations, newest production date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductionData>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM production_data ORDER BY production_date DESC");
        sqlx::query_as::<_, ProductionData>(&query)
            .fetch_all(pool)
            .await
    }
}

//! Repository for the `production_plans` table.

use fertiflow_core::production_plan::DEFAULT_PLAN_STATUS;
use fertiflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::production_plan::{CreateProductionPlan, ProductionPlan};

const COLUMNS: &str = "id, plan_name, plan_year, plan_type, description, status, \
                       created_by, created_at, updated_at";

/// Provides insert and list operations for production plans.
pub struct ProductionPlanRepo;

impl ProductionPlanRepo {
    /// Insert a new production plan, returning the created row.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateProductionPlan,
    ) -> Result<ProductionPlan, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or(DEFAULT_PLAN_STATUS);
        let query = format!(
            "INSERT INTO production_plans
                (plan_name, plan_year, plan_type, description, status, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionPlan>(&query)
            .bind(&input.plan_name)
            .bind(input.plan_year)
            .bind(&input.plan_type)
            .bind(&input.description)
            .bind(status)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List all production plans, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductionPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM production_plans ORDER BY created_at DESC");
        sqlx::query_as::<_, ProductionPlan>(&query)
            .fetch_all(pool)
            .await
    }
}

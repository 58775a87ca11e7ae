//! Repository for the `demand_requests` table.

use fertiflow_core::demand::DEFAULT_DEMAND_STATUS;
use fertiflow_core::types::DbId;
use sqlx::PgPool;

use crate::models::demand_request::{CreateDemandRequest, DemandRequest, UpdateDemandRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, request_id, region, fertilizer_type, quantity, status, \
                       requested_by, created_at, updated_at";

/// Provides CRUD operations for demand requests.
pub struct DemandRequestRepo;

impl DemandRequestRepo {
    /// Insert a new demand request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        requested_by: DbId,
        input: &CreateDemandRequest,
    ) -> Result<DemandRequest, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or(DEFAULT_DEMAND_STATUS);
        let query = format!(
            "INSERT INTO demand_requests
                (request_id, region, fertilizer_type, quantity, status, requested_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DemandRequest>(&query)
            .bind(&input.request_id)
            .bind(&input.region)
            .bind(&input.fertilizer_type)
            .bind(input.quantity)
            .bind(status)
            .bind(requested_by)
            .fetch_one(pool)
            .await
    }

    /// List all demand requests, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<DemandRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM demand_requests ORDER BY created_at DESC");
        sqlx::query_as::<_, DemandRequest>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a demand request. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDemandRequest,
    ) -> Result<Option<DemandRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE demand_requests SET
                request_id = COALESCE($2, request_id),
                region = COALESCE($3, region),
                fertilizer_type = COALESCE($4, fertilizer_type),
                quantity = COALESCE($5, quantity),
                status = COALESCE($6, status),
                updated_at = clock_timestamp()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DemandRequest>(&query)
            .bind(id)
            .bind(&input.request_id)
            .bind(&input.region)
            .bind(&input.fertilizer_type)
            .bind(input.quantity)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }
}

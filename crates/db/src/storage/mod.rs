//! The storage seam between HTTP handlers and persistence.
//!
//! Handlers only ever see `Arc<dyn Storage>`. [`PgStorage`] is the production
//! backend; [`MemStorage`] keeps everything in process and backs the HTTP
//! tests and database-less local runs.

use async_trait::async_trait;
use fertiflow_core::types::DbId;

use crate::models::demand_request::{CreateDemandRequest, DemandRequest, UpdateDemandRequest};
use crate::models::production_data::{CreateProductionData, ProductionData};
use crate::models::production_plan::{CreateProductionPlan, ProductionPlan};
use crate::models::session::{CreateSession, UserSession};
use crate::models::user::{CreateUser, User};

mod memory;
mod postgres;

pub use memory::MemStorage;
pub use postgres::PgStorage;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Failure reported by a [`Storage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A uniqueness constraint rejected the write.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    Conflict { constraint: String },

    /// Any other backend failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                tracing::debug!(%constraint, "Unique constraint violated");
                return StorageError::Conflict { constraint };
            }
        }
        StorageError::Database(err)
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence operations used by the route layer.
///
/// Every method issues at most one statement against the backend. Listing
/// methods return whole tables, newest first.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Confirm the backend is reachable.
    async fn health_check(&self) -> StorageResult<()>;

    async fn get_user(&self, id: DbId) -> StorageResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    async fn create_user(&self, input: &CreateUser) -> StorageResult<User>;

    async fn create_session(&self, input: &CreateSession) -> StorageResult<UserSession>;
    /// Look up a session that is neither revoked nor expired.
    async fn find_active_session(&self, token_hash: &str) -> StorageResult<Option<UserSession>>;
    /// Returns `true` if an active session was revoked.
    async fn revoke_session(&self, id: DbId) -> StorageResult<bool>;

    async fn get_demand_requests(&self) -> StorageResult<Vec<DemandRequest>>;
    async fn create_demand_request(
        &self,
        requested_by: DbId,
        input: &CreateDemandRequest,
    ) -> StorageResult<DemandRequest>;
    /// Apply the supplied fields and refresh `updated_at`.
    ///
    /// Returns `Ok(None)` when no row has the given `id`.
    async fn update_demand_request(
        &self,
        id: DbId,
        input: &UpdateDemandRequest,
    ) -> StorageResult<Option<DemandRequest>>;

    async fn get_production_plans(&self) -> StorageResult<Vec<ProductionPlan>>;
    async fn create_production_plan(
        &self,
        created_by: DbId,
        input: &CreateProductionPlan,
    ) -> StorageResult<ProductionPlan>;

    async fn get_production_data(&self) -> StorageResult<Vec<ProductionData>>;
    async fn create_production_data(
        &self,
        input: &CreateProductionData,
    ) -> StorageResult<ProductionData>;
}

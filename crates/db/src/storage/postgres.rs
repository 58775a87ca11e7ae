use async_trait::async_trait;
use fertiflow_core::types::DbId;
use sqlx::PgPool;

use super::{Storage, StorageResult};
use crate::models::demand_request::{CreateDemandRequest, DemandRequest, UpdateDemandRequest};
use crate::models::production_data::{CreateProductionData, ProductionData};
use crate::models::production_plan::{CreateProductionPlan, ProductionPlan};
use crate::models::session::{CreateSession, UserSession};
use crate::models::user::{CreateUser, User};
use crate::repositories::{
    DemandRequestRepo, ProductionDataRepo, ProductionPlanRepo, SessionRepo, UserRepo,
};

/// [`Storage`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn health_check(&self) -> StorageResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn get_user(&self, id: DbId) -> StorageResult<Option<User>> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(UserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn create_user(&self, input: &CreateUser) -> StorageResult<User> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }

    async fn create_session(&self, input: &CreateSession) -> StorageResult<UserSession> {
        Ok(SessionRepo::create(&self.pool, input).await?)
    }

    async fn find_active_session(&self, token_hash: &str) -> StorageResult<Option<UserSession>> {
        Ok(SessionRepo::find_active_by_token_hash(&self.pool, token_hash).await?)
    }

    async fn revoke_session(&self, id: DbId) -> StorageResult<bool> {
        Ok(SessionRepo::revoke(&self.pool, id).await?)
    }

    async fn get_demand_requests(&self) -> StorageResult<Vec<DemandRequest>> {
        Ok(DemandRequestRepo::list(&self.pool).await?)
    }

    async fn create_demand_request(
        &self,
        requested_by: DbId,
        input: &CreateDemandRequest,
    ) -> StorageResult<DemandRequest> {
        Ok(DemandRequestRepo::create(&self.pool, requested_by, input).await?)
    }

    async fn update_demand_request(
        &self,
        id: DbId,
        input: &UpdateDemandRequest,
    ) -> StorageResult<Option<DemandRequest>> {
        Ok(DemandRequestRepo::update(&self.pool, id, input).await?)
    }

    async fn get_production_plans(&self) -> StorageResult<Vec<ProductionPlan>> {
        Ok(ProductionPlanRepo::list(&self.pool).await?)
    }

    async fn create_production_plan(
        &self,
        created_by: DbId,
        input: &CreateProductionPlan,
    ) -> StorageResult<ProductionPlan> {
        Ok(ProductionPlanRepo::create(&self.pool, created_by, input).await?)
    }

    async fn get_production_data(&self) -> StorageResult<Vec<ProductionData>> {
        Ok(ProductionDataRepo::list(&self.pool).await?)
    }

    async fn create_production_data(
        &self,
        input: &CreateProductionData,
    ) -> StorageResult<ProductionData> {
        Ok(ProductionDataRepo::create(&self.pool, input).await?)
    }
}

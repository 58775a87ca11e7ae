use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use fertiflow_core::amounts::AMOUNT_SCALE;
use fertiflow_core::demand::DEFAULT_DEMAND_STATUS;
use fertiflow_core::production_data::DEFAULT_FACTORY_STATUS;
use fertiflow_core::production_plan::DEFAULT_PLAN_STATUS;
use fertiflow_core::types::{Amount, DbId, Timestamp};
use tokio::sync::RwLock;

use super::{Storage, StorageError, StorageResult};
use crate::models::demand_request::{CreateDemandRequest, DemandRequest, UpdateDemandRequest};
use crate::models::production_data::{CreateProductionData, ProductionData};
use crate::models::production_plan::{CreateProductionPlan, ProductionPlan};
use crate::models::session::{CreateSession, UserSession};
use crate::models::user::{CreateUser, User};

/// In-process [`Storage`] with the same uniqueness and ordering rules as the
/// PostgreSQL schema. Constraint names in conflicts match the migrations.
#[derive(Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

/// Rows kept in insertion order.
#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: Vec<UserSession>,
    demand_requests: Vec<DemandRequest>,
    production_plans: Vec<ProductionPlan>,
    production_data: Vec<ProductionData>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `is_active = false` on a user. Returns `true` if the user was active.
    #[cfg(any(test, feature = "test-util"))]
    pub async fn deactivate_user(&self, id: DbId) -> bool {
        let mut tables = self.tables.write().await;
        match tables.users.iter_mut().find(|u| u.id == id && u.is_active) {
            Some(user) => {
                user.is_active = false;
                true
            }
            None => false,
        }
    }

    /// Move a session's expiry, e.g. into the past.
    #[cfg(any(test, feature = "test-util"))]
    pub async fn set_session_expiry(&self, id: DbId, expires_at: Timestamp) -> bool {
        let mut tables = self.tables.write().await;
        match tables.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => {
                session.expires_at = expires_at;
                true
            }
            None => false,
        }
    }

    /// Number of sessions ever created, revoked or not.
    #[cfg(any(test, feature = "test-util"))]
    pub async fn session_count(&self) -> usize {
        self.tables.read().await.sessions.len()
    }
}

fn conflict(constraint: &str) -> StorageError {
    StorageError::Conflict {
        constraint: constraint.to_string(),
    }
}

/// Newest first; rows sharing a timestamp keep reverse insertion order.
fn newest_first<T: Clone>(rows: &[T], key: impl Fn(&T) -> Timestamp) -> Vec<T> {
    let mut out: Vec<T> = rows.iter().rev().cloned().collect();
    out.sort_by_key(|row| Reverse(key(row)));
    out
}

/// Round to the two decimal places a `NUMERIC(_, 2)` column stores.
fn to_column(amount: Amount) -> Amount {
    let mut stored = amount.round_dp(AMOUNT_SCALE);
    stored.rescale(AMOUNT_SCALE);
    stored
}

/// A timestamp strictly after `previous`, at the microsecond resolution
/// PostgreSQL stores.
fn later_than(previous: Timestamp) -> Timestamp {
    Utc::now().max(previous + Duration::microseconds(1))
}

#[async_trait]
impl Storage for MemStorage {
    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn get_user(&self, id: DbId) -> StorageResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, input: &CreateUser) -> StorageResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == input.username) {
            return Err(conflict("uq_users_username"));
        }
        let user = User {
            id: DbId::new_v4(),
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            role: input.role.clone(),
            full_name: input.full_name.clone(),
            email: input.email.clone(),
            is_active: true,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn create_session(&self, input: &CreateSession) -> StorageResult<UserSession> {
        let mut tables = self.tables.write().await;
        if tables.sessions.iter().any(|s| s.token_hash == input.token_hash) {
            return Err(conflict("uq_user_sessions_token_hash"));
        }
        let session = UserSession {
            id: DbId::new_v4(),
            user_id: input.user_id,
            token_hash: input.token_hash.clone(),
            expires_at: input.expires_at,
            is_revoked: false,
            created_at: Utc::now(),
        };
        tables.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_active_session(&self, token_hash: &str) -> StorageResult<Option<UserSession>> {
        let now = Utc::now();
        let tables = self.tables.read().await;
        Ok(tables
            .sessions
            .iter()
            .find(|s| s.token_hash == token_hash && !s.is_revoked && s.expires_at > now)
            .cloned())
    }

    async fn revoke_session(&self, id: DbId) -> StorageResult<bool> {
        let mut tables = self.tables.write().await;
        match tables
            .sessions
            .iter_mut()
            .find(|s| s.id == id && !s.is_revoked)
        {
            Some(session) => {
                session.is_revoked = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_demand_requests(&self) -> StorageResult<Vec<DemandRequest>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.demand_requests, |r| r.created_at))
    }

    async fn create_demand_request(
        &self,
        requested_by: DbId,
        input: &CreateDemandRequest,
    ) -> StorageResult<DemandRequest> {
        let mut tables = self.tables.write().await;
        if tables
            .demand_requests
            .iter()
            .any(|r| r.request_id == input.request_id)
        {
            return Err(conflict("uq_demand_requests_request_id"));
        }
        let now = Utc::now();
        let row = DemandRequest {
            id: DbId::new_v4(),
            request_id: input.request_id.clone(),
            region: input.region.clone(),
            fertilizer_type: input.fertilizer_type.clone(),
            quantity: to_column(input.quantity),
            status: input
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_DEMAND_STATUS.to_string()),
            requested_by: Some(requested_by),
            created_at: now,
            updated_at: now,
        };
        tables.demand_requests.push(row.clone());
        Ok(row)
    }

    async fn update_demand_request(
        &self,
        id: DbId,
        input: &UpdateDemandRequest,
    ) -> StorageResult<Option<DemandRequest>> {
        let mut tables = self.tables.write().await;
        if let Some(request_id) = &input.request_id {
            let taken = tables
                .demand_requests
                .iter()
                .any(|r| r.id != id && &r.request_id == request_id);
            if taken {
                return Err(conflict("uq_demand_requests_request_id"));
            }
        }
        let Some(row) = tables.demand_requests.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        if let Some(request_id) = &input.request_id {
            row.request_id = request_id.clone();
        }
        if let Some(region) = &input.region {
            row.region = region.clone();
        }
        if let Some(fertilizer_type) = &input.fertilizer_type {
            row.fertilizer_type = fertilizer_type.clone();
        }
        if let Some(quantity) = input.quantity {
            row.quantity = to_column(quantity);
        }
        if let Some(status) = &input.status {
            row.status = status.clone();
        }
        row.updated_at = later_than(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn get_production_plans(&self) -> StorageResult<Vec<ProductionPlan>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.production_plans, |p| p.created_at))
    }

    async fn create_production_plan(
        &self,
        created_by: DbId,
        input: &CreateProductionPlan,
    ) -> StorageResult<ProductionPlan> {
        let now = Utc::now();
        let row = ProductionPlan {
            id: DbId::new_v4(),
            plan_name: input.plan_name.clone(),
            plan_year: input.plan_year,
            plan_type: input.plan_type.clone(),
            description: input.description.clone(),
            status: input
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_PLAN_STATUS.to_string()),
            created_by: Some(created_by),
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.production_plans.push(row.clone());
        Ok(row)
    }

    async fn get_production_data(&self) -> StorageResult<Vec<ProductionData>> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.production_data, |d| d.production_date))
    }

    async fn create_production_data(
        &self,
        input: &CreateProductionData,
    ) -> StorageResult<ProductionData> {
        let row = ProductionData {
            id: DbId::new_v4(),
            factory_name: input.factory_name.clone(),
            fertilizer_type: input.fertilizer_type.clone(),
            daily_production: to_column(input.daily_production),
            target_production: to_column(input.target_production),
            efficiency_rate: to_column(input.efficiency_rate),
            status: input
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_FACTORY_STATUS.to_string()),
            production_date: Utc::now(),
        };
        self.tables.write().await.production_data.push(row.clone());
        Ok(row)
    }
}

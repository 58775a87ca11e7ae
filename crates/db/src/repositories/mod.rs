//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod demand_request_repo;
pub mod production_data_repo;
pub mod production_plan_repo;
pub mod session_repo;
pub mod user_repo;

pub use demand_request_repo::DemandRequestRepo;
pub use production_data_repo::ProductionDataRepo;
pub use production_plan_repo::ProductionPlanRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;

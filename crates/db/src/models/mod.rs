//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity is mutable
//!
//! Request DTOs derive `validator::Validate` for their length rules; the
//! vocabulary and amount rules live in `fertiflow_core`.

pub mod demand_request;
pub mod production_data;
pub mod production_plan;
pub mod session;
pub mod user;

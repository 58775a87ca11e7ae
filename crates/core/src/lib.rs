//! Domain types and rules shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O. It holds the id/timestamp aliases,
//! the [`error::CoreError`] taxonomy, and the vocabularies and validation
//! functions for each entity.

pub mod amounts;
pub mod demand;
pub mod error;
pub mod production_data;
pub mod production_plan;
pub mod roles;
pub mod types;

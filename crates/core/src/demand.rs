//! Demand request vocabulary and validation.
//!
//! Demand requests arrive from the Ministry of Agriculture and move between
//! `pending`, `approved` and `rejected`. Transitions are driven by staff; no
//! ordering between states is enforced.

use crate::amounts::validate_quantity;
use crate::types::Amount;

pub const DEMAND_STATUS_PENDING: &str = "pending";
pub const DEMAND_STATUS_APPROVED: &str = "approved";
pub const DEMAND_STATUS_REJECTED: &str = "rejected";

/// All valid demand request statuses.
pub const VALID_DEMAND_STATUSES: &[&str] = &[
    DEMAND_STATUS_PENDING,
    DEMAND_STATUS_APPROVED,
    DEMAND_STATUS_REJECTED,
];

/// Status assigned when a create request omits one.
pub const DEFAULT_DEMAND_STATUS: &str = DEMAND_STATUS_PENDING;

/// Validate that the status is one of the accepted values.
pub fn validate_demand_status(status: &str) -> Result<(), String> {
    if VALID_DEMAND_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid demand status '{status}'. Must be one of: {}",
            VALID_DEMAND_STATUSES.join(", ")
        ))
    }
}

/// Validate a requested fertilizer quantity.
pub fn validate_demand_quantity(quantity: Amount) -> Result<(), String> {
    validate_quantity("quantity", quantity)
}

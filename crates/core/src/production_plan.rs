//! Production plan vocabulary.

pub const PLAN_STATUS_DRAFT: &str = "draft";
pub const PLAN_STATUS_ACTIVE: &str = "active";
pub const PLAN_STATUS_COMPLETED: &str = "completed";

/// All valid production plan statuses.
pub const VALID_PLAN_STATUSES: &[&str] =
    &[PLAN_STATUS_DRAFT, PLAN_STATUS_ACTIVE, PLAN_STATUS_COMPLETED];

/// Status assigned when a create request omits one.
pub const DEFAULT_PLAN_STATUS: &str = PLAN_STATUS_DRAFT;

/// Earliest and latest plan years accepted.
pub const MIN_PLAN_YEAR: i32 = 2000;
pub const MAX_PLAN_YEAR: i32 = 2100;

/// Validate that the status is one of the accepted values.
pub fn validate_plan_status(status: &str) -> Result<(), String> {
    if VALID_PLAN_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid plan status '{status}'. Must be one of: {}",
            VALID_PLAN_STATUSES.join(", ")
        ))
    }
}

/// Validate that the plan year falls inside the accepted window.
pub fn validate_plan_year(year: i32) -> Result<(), String> {
    if (MIN_PLAN_YEAR..=MAX_PLAN_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(format!(
            "Plan year {year} must be between {MIN_PLAN_YEAR} and {MAX_PLAN_YEAR}"
        ))
    }
}

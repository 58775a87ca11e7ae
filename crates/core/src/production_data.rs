//! Factory production observations: status vocabulary and figure checks.

use crate::amounts::{validate_percentage, validate_quantity};
use crate::types::Amount;

pub const FACTORY_STATUS_OPERATIONAL: &str = "operational";
pub const FACTORY_STATUS_MAINTENANCE: &str = "maintenance";
pub const FACTORY_STATUS_STOPPED: &str = "stopped";

/// All valid factory statuses.
pub const VALID_FACTORY_STATUSES: &[&str] = &[
    FACTORY_STATUS_OPERATIONAL,
    FACTORY_STATUS_MAINTENANCE,
    FACTORY_STATUS_STOPPED,
];

/// Status assigned when a create request omits one.
pub const DEFAULT_FACTORY_STATUS: &str = FACTORY_STATUS_OPERATIONAL;

/// Validate that the status is one of the accepted values.
pub fn validate_factory_status(status: &str) -> Result<(), String> {
    if VALID_FACTORY_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid factory status '{status}'. Must be one of: {}",
            VALID_FACTORY_STATUSES.join(", ")
        ))
    }
}

/// Validate the numeric figures of one production observation.
pub fn validate_production_figures(
    daily_production: Amount,
    target_production: Amount,
    efficiency_rate: Amount,
) -> Result<(), String> {
    validate_quantity("dailyProduction", daily_production)?;
    validate_quantity("targetProduction", target_production)?;
    validate_percentage("efficiencyRate", efficiency_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_accepted() {
        for status in VALID_FACTORY_STATUSES {
            assert!(validate_factory_status(status).is_ok());
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(validate_factory_status("idle").is_err());
    }

    #[test]
    fn figures_within_bounds_accepted() {
        let result = validate_production_figures(
            Amount::new(450, 0),
            Amount::new(500, 0),
            Amount::new(9450, 2),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn efficiency_over_one_hundred_rejected() {
        let err = validate_production_figures(
            Amount::new(450, 0),
            Amount::new(500, 0),
            Amount::new(101, 0),
        )
        .unwrap_err();
        assert!(err.contains("efficiencyRate"));
    }

    #[test]
    fn negative_target_rejected() {
        let err = validate_production_figures(
            Amount::new(450, 0),
            Amount::new(-5, 0),
            Amount::new(90, 0),
        )
        .unwrap_err();
        assert!(err.contains("targetProduction"));
    }
}

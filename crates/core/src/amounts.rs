//! Fixed-point amount checks shared by demand quantities and production figures.
//!
//! Amounts land in `NUMERIC(10, 2)` columns (efficiency rates in
//! `NUMERIC(5, 2)`), so anything that would overflow the column or need more
//! than two fractional digits is rejected here instead of failing in the
//! database.

use crate::types::Amount;

/// Fractional digits kept by every amount column.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest value a `NUMERIC(10, 2)` column can hold.
pub const MAX_AMOUNT: Amount = Amount::from_parts(1_410_065_407, 2, 0, false, 2);

/// Upper bound for efficiency percentages.
pub const MAX_EFFICIENCY_RATE: Amount = Amount::ONE_HUNDRED;

/// Validate a non-negative amount no larger than `max`.
///
/// `field` names the offending input in the error message.
pub fn validate_amount(field: &str, amount: Amount, max: Amount) -> Result<(), String> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(format!("{field} must not be negative"));
    }
    if amount > max {
        return Err(format!("{field} must not exceed {max}"));
    }
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(format!(
            "{field} must have at most {AMOUNT_SCALE} decimal places"
        ));
    }
    Ok(())
}

/// Validate a quantity or production figure bound for a `NUMERIC(10, 2)` column.
pub fn validate_quantity(field: &str, amount: Amount) -> Result<(), String> {
    validate_amount(field, amount, MAX_AMOUNT)
}

/// Validate a percentage in `0..=100`.
pub fn validate_percentage(field: &str, amount: Amount) -> Result<(), String> {
    validate_amount(field, amount, MAX_EFFICIENCY_RATE)
}

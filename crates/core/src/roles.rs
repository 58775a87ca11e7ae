//! Well-known role names offered at registration.
//!
//! Roles are stored verbatim on the user row. Every authenticated role has
//! the same access to the business endpoints.

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_PROCUREMENT_OFFICER: &str = "Procurement Officer";
pub const ROLE_FACTORY_MANAGER: &str = "Factory Manager";
pub const ROLE_DEALER: &str = "Dealer";
pub const ROLE_TRANSPORT_MANAGER: &str = "Transport Manager";
pub const ROLE_HR_OFFICER: &str = "HR Officer";

pub const VALID_ROLES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_PROCUREMENT_OFFICER,
    ROLE_FACTORY_MANAGER,
    ROLE_DEALER,
    ROLE_TRANSPORT_MANAGER,
    ROLE_HR_OFFICER,
];

/// Validate that the role is one of the registrable roles.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}

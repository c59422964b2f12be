//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role`.

use validator::ValidationError;

use crate::validation::invalid;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

pub fn validate_role(value: &str) -> Result<(), ValidationError> {
    match value {
        ROLE_USER | ROLE_ADMIN => Ok(()),
        _ => Err(invalid("role", "Role must be one of: user, admin")),
    }
}

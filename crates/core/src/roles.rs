//! Well-known role name constants.
//!
//! These must match the seed data in `20260815000001_create_roles_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CUSTOMER: &str = "customer";
pub const ROLE_GUEST: &str = "guest";

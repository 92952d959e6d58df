//! Well-known role name constants.
//!
//! The site has a single privileged role; every authenticated token issued
//! by the login endpoint carries it.

pub const ROLE_ADMIN: &str = "admin";

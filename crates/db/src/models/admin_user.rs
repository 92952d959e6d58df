//! Admin account model.

use serde::Serialize;
use sqlx::FromRow;
use jasiq_core::types::{DbId, Timestamp};

/// Full row from the `admin_users` table.
///
/// Contains the password hash -- never serialize this directly.
/// Use [`AdminUserResponse`] for API output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub last_login_at: Option<Timestamp>,
}

impl From<&AdminUser> for AdminUserResponse {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            last_login_at: user.last_login_at,
        }
    }
}

/// Insert payload. `password_hash` must already be an argon2 PHC string.
#[derive(Debug, Clone)]
pub struct CreateAdminUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

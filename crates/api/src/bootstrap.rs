//! First-run admin account creation.
//!
//! When `ADMIN_USERNAME`, `ADMIN_EMAIL` and `ADMIN_PASSWORD` are all set,
//! startup makes sure that admin exists. An existing account is never
//! modified, so rotating the env password has no effect after the first run.

use jasiq_db::models::admin_user::{AdminUser, CreateAdminUser};
use jasiq_db::repositories::AdminUserRepo;
use jasiq_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Credentials for the bootstrap admin.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AdminSeed {
    /// Read the seed from the environment; `None` unless all three are set.
    pub fn from_env() -> Option<Self> {
        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Some(Self {
            username: read("ADMIN_USERNAME")?,
            email: read("ADMIN_EMAIL")?,
            password: read("ADMIN_PASSWORD")?,
        })
    }
}

/// Create the seed admin unless a user with that username already exists.
///
/// Returns the created user, or `None` when nothing was done.
pub async fn ensure_admin(pool: &DbPool, seed: &AdminSeed) -> AppResult<Option<AdminUser>> {
    if AdminUserRepo::find_by_username(pool, &seed.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %seed.username, "Bootstrap admin already exists");
        return Ok(None);
    }

    validate_password_strength(&seed.password, MIN_PASSWORD_LENGTH).map_err(AppError::BadRequest)?;
    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            username: seed.username.clone(),
            email: seed.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(Some(user))
}

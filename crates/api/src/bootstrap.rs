//! One-time startup tasks that need the database.

use enamorado_db::models::user::CreateUser;
use enamorado_db::repositories::UserRepo;
use enamorado_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};

/// Create the configured staff account if it is missing.
///
/// Does nothing unless both `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set.
/// An existing account is left untouched, password included.
pub async fn ensure_admin_user(pool: &DbPool, config: &ServerConfig) -> AppResult<()> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        tracing::debug!("No admin credentials configured, skipping account bootstrap");
        return Ok(());
    };

    if UserRepo::find_by_username(pool, username).await?.is_some() {
        tracing::debug!(%username, "Admin account already exists");
        return Ok(());
    }

    validate_password_strength(password, MIN_PASSWORD_LENGTH).map_err(AppError::BadRequest)?;

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, %username, "Admin account created");
    Ok(())
}

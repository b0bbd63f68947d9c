//! Handler for staff login.

use axum::extract::State;
use axum::Json;
use enamorado_core::error::CoreError;
use enamorado_db::models::user::UserResponse;
use enamorado_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login
///
/// Check a username and password and return the account without its hash.
/// Unknown users and wrong passwords get the same 401 so usernames cannot be
/// enumerated.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let user = UserRepo::find_by_username(&state.pool, input.username.trim())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = user.id, "Failed login attempt");
        return Err(invalid());
    }

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(UserResponse::from(user)))
}

//! Route definitions for the `/submissions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// GET    /                 -> list_submissions
/// POST   /                 -> create_submission
/// GET    /{id}             -> get_submission
/// POST   /{id}/status      -> review_submission
/// POST   /{id}/approve     -> approve_submission
/// POST   /{id}/moderate    -> moderate_submission
/// POST   /{id}/like        -> like_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(submissions::list_submissions).post(submissions::create_submission),
        )
        .route("/{id}", get(submissions::get_submission))
        .route("/{id}/status", post(submissions::review_submission))
        .route("/{id}/approve", post(submissions::approve_submission))
        .route("/{id}/moderate", post(submissions::moderate_submission))
        .route("/{id}/like", post(submissions::like_submission))
}

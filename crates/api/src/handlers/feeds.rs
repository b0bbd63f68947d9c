//! Read-only public feeds and the dashboard stats endpoint.

use axum::extract::State;
use axum::Json;
use enamorado_db::models::submission::{Submission, SubmissionStats};
use enamorado_db::repositories::SubmissionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/community-submissions
///
/// Every approved submission, newest first.
pub async fn community_feed(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    let submissions = SubmissionRepo::list_approved(&state.pool).await?;
    Ok(Json(submissions))
}

/// GET /api/editorial-submissions
///
/// Approved submissions placed in the editorial section.
pub async fn editorial_feed(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    let submissions = SubmissionRepo::list_editorial(&state.pool).await?;
    Ok(Json(submissions))
}

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<SubmissionStats>> {
    let stats = SubmissionRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}

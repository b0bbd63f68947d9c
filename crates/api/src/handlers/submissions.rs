//! Handlers for the `/submissions` resource: intake, listing, moderation,
//! and likes.
//!
//! Every write publishes a [`LiveEvent`] so connected dashboards refresh
//! without polling.

use axum::extract::{Query, State};
use axum::Json;
use enamorado_core::moderation::{
    ApproveRequest, ModerateUpdate, ModerationAction, ReviewUpdate,
};
use enamorado_core::error::CoreError;
use enamorado_core::types::DbId;
use enamorado_db::models::submission::{CreateSubmission, Submission, SubmissionListParams};
use enamorado_db::repositories::SubmissionRepo;
use enamorado_events::LiveEvent;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/submissions
///
/// Accept a new community submission. Status is always `pending`.
pub async fn create_submission(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSubmission>,
) -> AppResult<Json<Submission>> {
    let submission = SubmissionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        submission_id = submission.id,
        submitter = %submission.submitter_handle,
        content_type = %submission.content_type,
        "Submission received",
    );

    publish(&state, LiveEvent::new_submission(&submission));

    Ok(Json(submission))
}

/// GET /api/submissions?status=
///
/// List submissions newest first, optionally filtered by status.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(params): Query<SubmissionListParams>,
) -> AppResult<Json<Vec<Submission>>> {
    let status = params.status_filter()?;
    let submissions = SubmissionRepo::list(&state.pool, status).await?;
    Ok(Json(submissions))
}

/// GET /api/submissions/{id}
pub async fn get_submission(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Submission>> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::submission_not_found(id))?;
    Ok(Json(submission))
}

/// POST /api/submissions/{id}/status
///
/// Editorial review: any subset of status, editorial status, section,
/// feedback notes, reviewer, and community-voice flag.
pub async fn review_submission(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ReviewUpdate>,
) -> AppResult<Json<Submission>> {
    apply_action(&state, id, ModerationAction::Review(input)).await
}

/// POST /api/submissions/{id}/approve
///
/// Approve with a required reviewer name.
pub async fn approve_submission(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ApproveRequest>,
) -> AppResult<Json<Submission>> {
    apply_action(&state, id, ModerationAction::Approve(input)).await
}

/// POST /api/submissions/{id}/moderate
///
/// Quality score, flags, notes, and an optional status change.
pub async fn moderate_submission(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ModerateUpdate>,
) -> AppResult<Json<Submission>> {
    apply_action(&state, id, ModerationAction::Moderate(input)).await
}

/// POST /api/submissions/{id}/like
///
/// Add one like. Repeated calls each count.
pub async fn like_submission(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Submission>> {
    let submission = SubmissionRepo::increment_likes(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::submission_not_found(id))?;

    tracing::debug!(submission_id = id, likes = submission.likes, "Submission liked");

    Ok(Json(submission))
}

/// Attempts before a moderation write gives up on a row that keeps changing.
const MAX_MODERATION_ATTEMPTS: usize = 3;

/// Shared path for every moderation surface: load, plan against the current
/// workflow state, persist, publish.
///
/// The write is conditional on the state the plan was checked against. When
/// another moderator got there first, the action is planned again against the
/// fresh row, so an illegal move still ends in a 409.
async fn apply_action(
    state: &AppState,
    id: DbId,
    action: ModerationAction,
) -> AppResult<Json<Submission>> {
    let kind = action.kind();

    for attempt in 1..=MAX_MODERATION_ATTEMPTS {
        let current = SubmissionRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| AppError::submission_not_found(id))?;

        let expected = current.workflow_state()?;
        let plan = action.clone().plan(expected.0, expected.1)?;

        let Some(updated) =
            SubmissionRepo::apply_moderation(&state.pool, id, expected, &plan).await?
        else {
            tracing::debug!(
                submission_id = id,
                action = kind,
                attempt,
                "Workflow state changed, replanning",
            );
            continue;
        };

        tracing::info!(
            submission_id = id,
            action = kind,
            from_status = %current.status,
            to_status = %updated.status,
            editorial_status = %updated.editorial_status,
            reviewed_by = updated.reviewed_by.as_deref().unwrap_or(""),
            "Submission moderated",
        );

        publish(state, LiveEvent::submission_updated(&updated));

        return Ok(Json(updated));
    }

    Err(AppError::Core(CoreError::Conflict(format!(
        "Submission {id} is being moderated concurrently, try again"
    ))))
}

/// Publish a live event; an encoding failure is logged, never surfaced to
/// the caller whose write already succeeded.
fn publish(state: &AppState, event: Result<LiveEvent, serde_json::Error>) {
    match event {
        Ok(event) => state.event_bus.publish(event),
        Err(e) => tracing::error!(error = %e, "Failed to build live event"),
    }
}

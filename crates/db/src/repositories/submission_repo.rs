//! Repository for the `submissions` table.

use enamorado_core::moderation::ModerationPlan;
use enamorado_core::submission::{EditorialStatus, Section, SubmissionStatus};
use enamorado_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission, SubmissionStats};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, submitter_handle, submitter_email, \
    social_handle, category, content_type, status, files, collaboration_links, \
    substack_url, external_platform, original_excerpt, original_author, original_date, \
    likes, editorial_status, feedback_notes, is_community_voice, section, \
    quality_score, moderation_flags, admin_notes, rejection_reason, \
    reviewed_by, reviewed_at, created_at";

/// Provides CRUD and workflow operations for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission.
    ///
    /// Status is always `pending` and likes start at zero regardless of
    /// input; content type and platform fall back to URL detection.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions
                (title, description, submitter_handle, submitter_email, social_handle,
                 category, content_type, status, files, collaboration_links,
                 substack_url, external_platform, original_excerpt, original_author,
                 original_date, likes, section, is_community_voice)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, 0,
                     COALESCE($16, 'community'), COALESCE($17, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.submitter_handle)
            .bind(&input.submitter_email)
            .bind(&input.social_handle)
            .bind(input.category.as_str())
            .bind(input.resolved_content_type().as_str())
            .bind(SubmissionStatus::Pending.as_str())
            .bind(input.files.clone().unwrap_or_default())
            .bind(input.collaboration_links.clone().unwrap_or_default())
            .bind(&input.substack_url)
            .bind(input.resolved_platform())
            .bind(&input.original_excerpt)
            .bind(&input.original_author)
            .bind(input.original_date)
            .bind(input.section.map(Section::as_str))
            .bind(input.is_community_voice)
            .fetch_one(pool)
            .await
    }

    /// List submissions newest first, optionally restricted to one status.
    pub async fn list(
        pool: &PgPool,
        status: Option<SubmissionStatus>,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(status.map(SubmissionStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Find a submission by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a validated moderation plan.
    ///
    /// The update only lands while the row still has the `expected` workflow
    /// state the plan was checked against. `None` fields keep their stored
    /// value; `reviewed_at` is always stamped. Returns `None` if the id does
    /// not exist or the workflow state has moved on.
    pub async fn apply_moderation(
        pool: &PgPool,
        id: DbId,
        expected: (SubmissionStatus, EditorialStatus),
        plan: &ModerationPlan,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let (expected_status, expected_editorial) = expected;
        let query = format!(
            "UPDATE submissions SET
                status = COALESCE($1, status),
                editorial_status = COALESCE($2, editorial_status),
                section = COALESCE($3, section),
                feedback_notes = COALESCE($4, feedback_notes),
                reviewed_by = COALESCE($5, reviewed_by),
                is_community_voice = COALESCE($6, is_community_voice),
                quality_score = COALESCE($7, quality_score),
                moderation_flags = COALESCE($8, moderation_flags),
                admin_notes = COALESCE($9, admin_notes),
                rejection_reason = COALESCE($10, rejection_reason),
                reviewed_at = NOW()
             WHERE id = $11 AND status = $12 AND editorial_status = $13
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(plan.status.map(|s| s.as_str()))
            .bind(plan.editorial_status.map(|s| s.as_str()))
            .bind(plan.section.map(|s| s.as_str()))
            .bind(&plan.feedback_notes)
            .bind(&plan.reviewed_by)
            .bind(plan.is_community_voice)
            .bind(plan.quality_score)
            .bind(&plan.moderation_flags)
            .bind(&plan.admin_notes)
            .bind(&plan.rejection_reason)
            .bind(id)
            .bind(expected_status.as_str())
            .bind(expected_editorial.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Add one like. Not de-duplicated: every call counts.
    pub async fn increment_likes(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET likes = likes + 1
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Approved submissions for the community feed, newest first.
    pub async fn list_approved(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE status = 'approved'
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Approved submissions in the editorial section, newest first.
    pub async fn list_editorial(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE status = 'approved' AND section = 'editorial'
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Dashboard counters computed in a single pass.
    pub async fn stats(pool: &PgPool) -> Result<SubmissionStats, sqlx::Error> {
        sqlx::query_as::<_, SubmissionStats>(
            "SELECT
                COUNT(*) FILTER (WHERE status = 'pending')  AS pending,
                COUNT(*) FILTER (WHERE status = 'approved') AS approved,
                COUNT(*) FILTER (WHERE status = 'rejected') AS rejected,
                COUNT(*) FILTER (WHERE status = 'flagged')  AS flagged,
                COUNT(*)                                    AS total,
                COALESCE(SUM(likes), 0)::BIGINT             AS total_likes,
                COUNT(DISTINCT submitter_handle)            AS contributors
             FROM submissions",
        )
        .fetch_one(pool)
        .await
    }
}

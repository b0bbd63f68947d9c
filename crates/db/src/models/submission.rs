//! Submission entity model, intake DTO, and aggregate stats.

use enamorado_core::content::{detect_first, DetectedContent};
use enamorado_core::error::CoreError;
use enamorado_core::submission::{
    Category, ContentType, EditorialStatus, Section, SubmissionStatus,
};
use enamorado_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `submissions` table.
///
/// Workflow columns are stored as TEXT; use [`Submission::workflow_state`]
/// to get the typed values.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub submitter_handle: String,
    pub submitter_email: Option<String>,
    pub social_handle: Option<String>,
    pub category: String,
    pub content_type: String,
    pub status: String,
    pub files: Vec<String>,
    pub collaboration_links: Vec<String>,
    pub substack_url: Option<String>,
    pub external_platform: Option<String>,
    pub original_excerpt: Option<String>,
    pub original_author: Option<String>,
    pub original_date: Option<Timestamp>,
    pub likes: i32,
    pub editorial_status: String,
    pub feedback_notes: Option<String>,
    pub is_community_voice: bool,
    pub section: String,
    pub quality_score: Option<i32>,
    pub moderation_flags: Vec<String>,
    pub admin_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Submission {
    /// Parse the stored status and editorial status.
    ///
    /// Fails only if the row holds a value outside the known vocabulary,
    /// which the table's CHECK constraints prevent.
    pub fn workflow_state(&self) -> Result<(SubmissionStatus, EditorialStatus), CoreError> {
        let status = self
            .status
            .parse::<SubmissionStatus>()
            .map_err(|e| CoreError::Internal(format!("submission {}: {e}", self.id)))?;
        let editorial = self
            .editorial_status
            .parse::<EditorialStatus>()
            .map_err(|e| CoreError::Internal(format!("submission {}: {e}", self.id)))?;
        Ok((status, editorial))
    }
}

/// DTO for `POST /api/submissions`.
///
/// Status, likes, reviewer fields, and timestamps are not accepted; the
/// server assigns them.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmission {
    #[validate(
        length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"),
        custom(function = "enamorado_core::validation::validate_not_blank")
    )]
    pub title: String,
    #[validate(length(
        min = 10,
        max = 1000,
        message = "Description must be between 10 and 1000 characters"
    ))]
    pub description: String,
    #[validate(
        length(min = 2, max = 30, message = "Handle must be between 2 and 30 characters"),
        custom(function = "enamorado_core::validation::validate_not_blank")
    )]
    pub submitter_handle: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub submitter_email: Option<String>,
    #[validate(length(max = 50, message = "Social handle is too long"))]
    pub social_handle: Option<String>,
    pub category: Category,
    pub content_type: Option<ContentType>,
    pub files: Option<Vec<String>>,
    #[validate(custom(function = "enamorado_core::validation::validate_url_list"))]
    pub collaboration_links: Option<Vec<String>>,
    pub substack_url: Option<String>,
    pub external_platform: Option<String>,
    pub original_excerpt: Option<String>,
    pub original_author: Option<String>,
    pub original_date: Option<Timestamp>,
    pub section: Option<Section>,
    pub is_community_voice: Option<bool>,
}

impl CreateSubmission {
    /// Detection over the Substack URL, then the collaboration links.
    fn detected(&self) -> Option<DetectedContent> {
        let links = self.collaboration_links.iter().flatten().map(String::as_str);
        detect_first(self.substack_url.as_deref().into_iter().chain(links))
    }

    /// Explicit content type, else the detected one, else `text`.
    pub fn resolved_content_type(&self) -> ContentType {
        self.content_type
            .or_else(|| self.detected().map(|d| d.content_type))
            .unwrap_or_default()
    }

    /// Explicit platform label, else the detected one.
    pub fn resolved_platform(&self) -> Option<String> {
        self.external_platform
            .clone()
            .or_else(|| self.detected().map(|d| d.platform.to_string()))
    }
}

/// Query parameters for `GET /api/submissions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionListParams {
    pub status: Option<String>,
}

impl SubmissionListParams {
    /// The parsed status filter. A missing or blank value means no filter.
    pub fn status_filter(&self) -> Result<Option<SubmissionStatus>, CoreError> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }
}

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStats {
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub flagged: i64,
    pub total: i64,
    pub total_likes: i64,
    /// Distinct submitter handles.
    pub contributors: i64,
}

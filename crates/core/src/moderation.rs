//! Moderation actions, flags, quality scores, and rejection templates.
//!
//! All three moderation surfaces (`/status`, `/approve`, `/moderate`) are
//! expressed as a [`ModerationAction`]. [`ModerationAction::plan`] checks the
//! payload and the requested transitions against the submission's current
//! state and produces a [`ModerationPlan`]: a partial update in which `None`
//! means "leave the column as it is".

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::submission::{EditorialStatus, Section, SubmissionStatus};

/* --------------------------------------------------------------------------
Flags and scoring
-------------------------------------------------------------------------- */

pub const FLAG_LOW_EFFORT: &str = "low_effort";
pub const FLAG_INAPPROPRIATE: &str = "inappropriate";
pub const FLAG_SPAM: &str = "spam";
pub const FLAG_OFF_TOPIC: &str = "off_topic";
pub const FLAG_POOR_QUALITY: &str = "poor_quality";
pub const FLAG_DUPLICATE: &str = "duplicate";

/// All valid moderation flag ids.
pub const VALID_FLAGS: &[&str] = &[
    FLAG_LOW_EFFORT,
    FLAG_INAPPROPRIATE,
    FLAG_SPAM,
    FLAG_OFF_TOPIC,
    FLAG_POOR_QUALITY,
    FLAG_DUPLICATE,
];

pub const MIN_QUALITY_SCORE: i32 = 0;
pub const MAX_QUALITY_SCORE: i32 = 100;

/// Validate a single moderation flag id.
pub fn validate_flag(flag: &str) -> Result<(), CoreError> {
    if VALID_FLAGS.contains(&flag) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid moderation flag '{flag}'. Must be one of: {}",
            VALID_FLAGS.join(", ")
        )))
    }
}

/// Validate every flag and drop duplicates, keeping first-seen order.
pub fn normalize_flags(flags: &[String]) -> Result<Vec<String>, CoreError> {
    let mut out: Vec<String> = Vec::with_capacity(flags.len());
    for flag in flags {
        validate_flag(flag)?;
        if !out.contains(flag) {
            out.push(flag.clone());
        }
    }
    Ok(out)
}

pub fn validate_quality_score(score: i32) -> Result<(), CoreError> {
    if (MIN_QUALITY_SCORE..=MAX_QUALITY_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Quality score must be between {MIN_QUALITY_SCORE} and {MAX_QUALITY_SCORE}, got {score}"
        )))
    }
}

/* --------------------------------------------------------------------------
Rejection templates
-------------------------------------------------------------------------- */

/// Canned feedback a moderator can send with a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RejectionTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

pub const REJECTION_TEMPLATES: &[RejectionTemplate] = &[
    RejectionTemplate {
        id: FLAG_LOW_EFFORT,
        title: "Content Quality Standards",
        message: "Thank you for your submission. We're looking for work that demonstrates \
                  thoughtful creative process and substantial effort. Please consider developing \
                  your concept further and resubmitting with more detailed work.",
    },
    RejectionTemplate {
        id: FLAG_INAPPROPRIATE,
        title: "Editorial Guidelines",
        message: "Your submission doesn't align with our editorial standards. Please review our \
                  community guidelines and consider how your work fits within our art, fashion, \
                  photography, or mixed media categories.",
    },
    RejectionTemplate {
        id: FLAG_POOR_QUALITY,
        title: "Technical Standards",
        message: "We'd love to feature your work, but the current files don't meet our technical \
                  requirements. Please resubmit with higher quality images or clearer documentation.",
    },
    RejectionTemplate {
        id: FLAG_OFF_TOPIC,
        title: "Content Focus",
        message: "While we appreciate your creativity, this submission doesn't fit our current \
                  editorial focus on art, fashion, photography, and mixed media. Consider how your \
                  work might be reframed to fit these categories.",
    },
];

/* --------------------------------------------------------------------------
Actions
-------------------------------------------------------------------------- */

/// Body of `POST /submissions/{id}/status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub status: Option<SubmissionStatus>,
    pub editorial_status: Option<EditorialStatus>,
    pub section: Option<Section>,
    pub feedback_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub is_community_voice: Option<bool>,
}

/// Body of `POST /submissions/{id}/approve`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    pub reviewed_by: Option<String>,
}

/// Body of `POST /submissions/{id}/moderate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateUpdate {
    pub status: Option<SubmissionStatus>,
    pub quality_score: Option<i32>,
    pub moderation_flags: Option<Vec<String>>,
    pub admin_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub reviewed_by: Option<String>,
}

/// One moderation request, whichever surface it arrived through.
#[derive(Debug, Clone)]
pub enum ModerationAction {
    Review(ReviewUpdate),
    Approve(ApproveRequest),
    Moderate(ModerateUpdate),
}

/// Validated partial update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModerationPlan {
    pub status: Option<SubmissionStatus>,
    pub editorial_status: Option<EditorialStatus>,
    pub section: Option<Section>,
    pub feedback_notes: Option<String>,
    pub reviewed_by: Option<String>,
    pub is_community_voice: Option<bool>,
    pub quality_score: Option<i32>,
    pub moderation_flags: Option<Vec<String>>,
    pub admin_notes: Option<String>,
    pub rejection_reason: Option<String>,
}

impl ModerationAction {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ModerationAction::Review(_) => "review",
            ModerationAction::Approve(_) => "approve",
            ModerationAction::Moderate(_) => "moderate",
        }
    }

    /// Validate the action against the submission's current workflow state.
    pub fn plan(
        self,
        current_status: SubmissionStatus,
        current_editorial: EditorialStatus,
    ) -> Result<ModerationPlan, CoreError> {
        match self {
            ModerationAction::Review(input) => {
                let status = input
                    .status
                    .map(|s| current_status.transition_to(s))
                    .transpose()?;
                let editorial_status = input
                    .editorial_status
                    .map(|s| current_editorial.transition_to(s))
                    .transpose()?;

                Ok(ModerationPlan {
                    status,
                    editorial_status,
                    section: input.section,
                    feedback_notes: non_blank(input.feedback_notes),
                    reviewed_by: non_blank(input.reviewed_by),
                    is_community_voice: input.is_community_voice,
                    ..Default::default()
                })
            }

            ModerationAction::Approve(input) => {
                let reviewed_by = non_blank(input.reviewed_by).ok_or_else(|| {
                    CoreError::Validation("Reviewer name is required".to_string())
                })?;
                let status = current_status.transition_to(SubmissionStatus::Approved)?;

                Ok(ModerationPlan {
                    status: Some(status),
                    reviewed_by: Some(reviewed_by),
                    ..Default::default()
                })
            }

            ModerationAction::Moderate(input) => {
                if let Some(score) = input.quality_score {
                    validate_quality_score(score)?;
                }
                let moderation_flags = input
                    .moderation_flags
                    .as_deref()
                    .map(normalize_flags)
                    .transpose()?;
                let rejection_reason = non_blank(input.rejection_reason);

                if input.status == Some(SubmissionStatus::Rejected) && rejection_reason.is_none() {
                    return Err(CoreError::Validation(
                        "A rejection reason is required when rejecting a submission".to_string(),
                    ));
                }

                let status = input
                    .status
                    .map(|s| current_status.transition_to(s))
                    .transpose()?;

                Ok(ModerationPlan {
                    status,
                    quality_score: input.quality_score,
                    moderation_flags,
                    admin_notes: non_blank(input.admin_notes),
                    rejection_reason,
                    reviewed_by: non_blank(input.reviewed_by),
                    ..Default::default()
                })
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Reference data for the moderation dashboard.

use axum::Json;
use enamorado_core::moderation::{RejectionTemplate, REJECTION_TEMPLATES};

/// GET /api/rejection-templates
///
/// Canned feedback a moderator can paste into a rejection reason.
pub async fn list_rejection_templates() -> Json<&'static [RejectionTemplate]> {
    Json(REJECTION_TEMPLATES)
}

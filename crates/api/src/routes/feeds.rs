//! Public feeds, featured stories, and dashboard reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::{featured, feeds, moderation};
use crate::state::AppState;

/// Routes merged directly under `/api`. All of them are reads.
///
/// ```text
/// GET    /community-submissions     -> community_feed
/// GET    /editorial-submissions     -> editorial_feed
/// GET    /featured-stories          -> list_featured_stories
/// GET    /rejection-templates       -> list_rejection_templates
/// GET    /stats                     -> stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/community-submissions", get(feeds::community_feed))
        .route("/editorial-submissions", get(feeds::editorial_feed))
        .route("/featured-stories", get(featured::list_featured_stories))
        .route("/rejection-templates", get(moderation::list_rejection_templates))
        .route("/stats", get(feeds::stats))
}

//! Handler for the read-only `/featured-stories` resource.

use axum::extract::State;
use axum::Json;
use enamorado_db::models::featured_story::FeaturedStory;
use enamorado_db::repositories::FeaturedStoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/featured-stories
///
/// Active stories, the featured one first.
pub async fn list_featured_stories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FeaturedStory>>> {
    let stories = FeaturedStoryRepo::list_active(&state.pool).await?;
    Ok(Json(stories))
}

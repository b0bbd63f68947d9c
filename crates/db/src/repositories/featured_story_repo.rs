//! Repository for the `featured_stories` table.

use sqlx::PgPool;

use crate::models::featured_story::FeaturedStory;

const COLUMNS: &str = "id, title, excerpt, author, category, image_url, external_url, \
    is_active, is_featured, created_at";

pub struct FeaturedStoryRepo;

impl FeaturedStoryRepo {
    /// Active stories, featured ones first, then newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<FeaturedStory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM featured_stories
             WHERE is_active
             ORDER BY is_featured DESC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, FeaturedStory>(&query)
            .fetch_all(pool)
            .await
    }
}

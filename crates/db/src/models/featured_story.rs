//! Featured story (editorial spotlight) model.
//!
//! Rows come from the seed migration; the API only reads them.

use enamorado_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `featured_stories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedStory {
    pub id: DbId,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub image_url: Option<String>,
    pub external_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
}

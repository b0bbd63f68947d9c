//! Repository-level tests for `FeaturedStoryRepo` and `UserRepo`.

use assert_matches::assert_matches;
use enamorado_db::models::user::{CreateUser, UserResponse};
use enamorado_db::repositories::{FeaturedStoryRepo, UserRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_stories_are_active_with_one_featured(pool: PgPool) {
    let stories = FeaturedStoryRepo::list_active(&pool).await.unwrap();

    assert_eq!(stories.len(), 3);
    assert_eq!(stories[0].title, "Imagining Tomorrow");
    assert_eq!(stories.iter().filter(|s| s.is_featured).count(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_stories_are_hidden_and_newer_features_lead(pool: PgPool) {
    sqlx::query(
        "INSERT INTO featured_stories (title, excerpt, author, category, is_active, is_featured)
         VALUES ('Night Markets', 'Food, neon, and the people who run the stalls.',
                 'City Desk', 'Culture', TRUE, TRUE),
                ('Archive Piece', 'Retired from the homepage.', 'Desk', 'Art', FALSE, TRUE)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let stories = FeaturedStoryRepo::list_active(&pool).await.unwrap();
    let titles: Vec<&str> = stories.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(titles.len(), 4);
    assert_eq!(titles[0], "Night Markets");
    assert_eq!(titles[1], "Imagining Tomorrow");
    assert!(!titles.contains(&"Archive Piece"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_are_unique_by_username(pool: PgPool) {
    let input = CreateUser {
        username: "editor".into(),
        password_hash: "$argon2id$placeholder".into(),
    };
    let user = UserRepo::create(&pool, &input).await.unwrap();

    let by_name = UserRepo::find_by_username(&pool, "editor")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_name.password_hash, "$argon2id$placeholder");

    let response = UserResponse::from(by_name);
    assert_eq!(response.id, user.id);
    assert_eq!(response.username, "editor");

    assert!(UserRepo::find_by_username(&pool, "Editor")
        .await
        .unwrap()
        .is_none());

    let duplicate = UserRepo::create(&pool, &input).await;
    assert_matches!(
        duplicate,
        Err(sqlx::Error::Database(ref e)) if e.constraint() == Some("uq_users_username")
    );
}

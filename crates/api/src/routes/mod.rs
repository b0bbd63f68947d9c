pub mod auth;
pub mod feeds;
pub mod health;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (POST)
///
/// /submissions                      list (?status=), create
/// /submissions/{id}                 get
/// /submissions/{id}/status          editorial review (POST)
/// /submissions/{id}/approve         approve (POST)
/// /submissions/{id}/moderate        score, flag, reject (POST)
/// /submissions/{id}/like            like (POST)
///
/// /community-submissions            approved feed (GET)
/// /editorial-submissions            approved editorial feed (GET)
/// /featured-stories                 active stories (GET)
/// /rejection-templates              canned rejection messages (GET)
/// /stats                            dashboard counters (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/submissions", submissions::router())
        .merge(feeds::router())
}

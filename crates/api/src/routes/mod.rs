pub mod admin;
pub mod auth;
pub mod comments;
pub mod discussions;
pub mod health;
pub mod leaderboard;
pub mod lessons;
pub mod paths;
pub mod progress;
pub mod questions;
pub mod topics;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/me                             current identity (auth)
///
/// /users                               list, create
/// /users/{id}                          get, update, delete
/// /users/{id}/paths                    paths authored by the user
///
/// /paths                               list (filters), create
/// /paths/publish                       transactional tree publish (auth)
/// /paths/{id}                          get tree, update, delete
/// /paths/{id}/discussions              list, create (auth)
///
/// /topics                              list (?pathId), create
/// /topics/{id}                         get, update, delete
///
/// /lessons                             list (?topicId), create
/// /lessons/{id}                        get, update, delete
///
/// /questions                           list (?type&difficulty&topicId), create
/// /questions/{id}                      get, update, delete
///
/// /progress                            upsert (POST)
/// /progress/{id}                       delete
/// /progress/user/{user_id}             list a user's progress
/// /progress/user/{user_id}/stats       aggregate stats
///
/// /discussions/{id}                    get with comments, delete
/// /discussions/{id}/pin                pin or unpin (admin)
/// /discussions/{id}/comments           add comment (auth)
/// /comments/{id}                       delete
///
/// /leaderboard                         top 50
/// /leaderboard/me                      caller's entry (auth)
///
/// /admin/stats                         platform totals (admin)
/// /admin/users/{id}/role               change a user's role (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/paths", paths::router())
        .nest("/topics", topics::router())
        .nest("/lessons", lessons::router())
        .nest("/questions", questions::router())
        .nest("/progress", progress::router())
        .nest("/discussions", discussions::router())
        .nest("/comments", comments::router())
        .nest("/leaderboard", leaderboard::router())
        .nest("/admin", admin::router())
}

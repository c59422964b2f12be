use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/progress`.
///
/// ```text
/// POST   /                        -> upsert
/// DELETE /{id}                    -> delete
/// GET    /user/{user_id}          -> list_for_user
/// GET    /user/{user_id}/stats    -> stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(progress::upsert))
        .route("/{id}", delete(progress::delete))
        .route("/user/{user_id}", get(progress::list_for_user))
        .route("/user/{user_id}/stats", get(progress::stats))
}

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::discussions;
use crate::state::AppState;

/// Routes mounted at `/discussions`.
///
/// Listing and creation live under `/paths/{id}/discussions`.
///
/// ```text
/// GET    /{id}             -> get_by_id
/// DELETE /{id}             -> delete
/// PUT    /{id}/pin         -> set_pinned
/// POST   /{id}/comments    -> add_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(discussions::get_by_id).delete(discussions::delete),
        )
        .route("/{id}/pin", put(discussions::set_pinned))
        .route("/{id}/comments", post(discussions::add_comment))
}

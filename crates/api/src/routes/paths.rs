//! Route definitions for the `/paths` resource.
//!
//! Also nests the path-scoped discussion routes under `/paths/{id}/discussions`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{discussions, paths};
use crate::state::AppState;

/// Routes mounted at `/paths`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// POST   /publish               -> publish
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
///
/// GET    /{id}/discussions      -> discussions::list_by_path
/// POST   /{id}/discussions      -> discussions::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(paths::list).post(paths::create))
        .route("/publish", post(paths::publish))
        .route(
            "/{id}",
            get(paths::get_by_id)
                .put(paths::update)
                .delete(paths::delete),
        )
        .route(
            "/{id}/discussions",
            get(discussions::list_by_path).post(discussions::create),
        )
}

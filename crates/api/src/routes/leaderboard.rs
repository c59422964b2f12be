use axum::routing::get;
use axum::Router;

use crate::handlers::leaderboard;
use crate::state::AppState;

/// Routes mounted at `/leaderboard`.
///
/// ```text
/// GET    /       -> top
/// GET    /me     -> me
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leaderboard::top))
        .route("/me", get(leaderboard::me))
}

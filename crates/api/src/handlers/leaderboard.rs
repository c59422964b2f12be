//! Handlers for the `/leaderboard` resource.

use axum::extract::State;
use axum::Json;
use pathway_core::leaderboard::LeaderboardEntry;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::services::leaderboard;
use crate::state::AppState;

/// GET /api/v1/leaderboard
pub async fn top(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<LeaderboardEntry>>>> {
    let data = leaderboard::top(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/leaderboard/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<LeaderboardEntry>>> {
    let data = leaderboard::for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data }))
}

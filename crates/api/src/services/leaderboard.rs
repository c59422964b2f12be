use pathway_core::leaderboard::{
    find_for_user, rank_standings, LeaderboardEntry, Standing, LEADERBOARD_LIMIT,
};
use pathway_core::types::DbId;
use pathway_db::repositories::{LeaderboardRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// The top users by completed items, ranked by position.
pub async fn top(pool: &PgPool) -> AppResult<Vec<LeaderboardEntry>> {
    let rows = LeaderboardRepo::top(pool, LEADERBOARD_LIMIT).await?;
    Ok(rank_standings(rows.into_iter().map(Standing::from)))
}

/// The caller's own entry in the ranked list.
///
/// Users outside the ranked list have no entry and get a 404.
pub async fn for_user(pool: &PgPool, user_id: DbId) -> AppResult<LeaderboardEntry> {
    if !UserRepo::exists(pool, user_id).await? {
        return Err(AppError::not_found("User", user_id));
    }

    let entries = top(pool).await?;
    find_for_user(&entries, user_id)
        .cloned()
        .ok_or(AppError::not_found("Leaderboard entry", user_id))
}

//! Leaderboard aggregate rows.

use pathway_core::leaderboard::Standing;
use pathway_core::types::DbId;
use sqlx::FromRow;

/// One user's completed-item count, as returned by the ranking query.
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRow {
    pub user_id: DbId,
    pub name: Option<String>,
    pub email: String,
    pub completed_count: i64,
}

impl From<LeaderboardRow> for Standing {
    fn from(row: LeaderboardRow) -> Self {
        Standing {
            user_id: row.user_id,
            name: row.name,
            email: row.email,
            completed_count: row.completed_count,
        }
    }
}

//! Ranking query over completed progress rows.

use sqlx::PgPool;

use crate::models::leaderboard::LeaderboardRow;

pub struct LeaderboardRepo;

impl LeaderboardRepo {
    /// Users with at least one completed item, by completed count descending.
    ///
    /// Ties are ordered by email, then id, so repeated calls with no
    /// intervening writes return the same order.
    pub async fn top(pool: &PgPool, limit: i64) -> Result<Vec<LeaderboardRow>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardRow>(
            "SELECT u.id AS user_id, u.name, u.email, COUNT(pr.id) AS completed_count
             FROM progress pr
             JOIN users u ON u.id = pr.user_id
             WHERE pr.completed
             GROUP BY u.id, u.name, u.email
             ORDER BY completed_count DESC, u.email ASC, u.id ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

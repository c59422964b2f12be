//! Aggregate counts across the main tables.

use sqlx::PgPool;

use crate::models::stats::PlatformStats;

pub struct StatsRepo;

impl StatsRepo {
    /// Row counts for users, paths, and questions, plus completed progress.
    pub async fn platform_totals(pool: &PgPool) -> Result<PlatformStats, sqlx::Error> {
        let query = "\
            SELECT \
                (SELECT COUNT(*) FROM users) AS total_users, \
                (SELECT COUNT(*) FROM paths) AS total_paths, \
                (SELECT COUNT(*) FROM questions) AS total_questions, \
                (SELECT COUNT(*) FROM progress WHERE completed) AS completed_progress";
        sqlx::query_as::<_, PlatformStats>(query)
            .fetch_one(pool)
            .await
    }
}

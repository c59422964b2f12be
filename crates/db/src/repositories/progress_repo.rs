//! Repository for the `progress` table.
//!
//! Writes go through [`ProgressRepo::upsert`], a single
//! `INSERT .. ON CONFLICT .. DO UPDATE` statement, so concurrent updates for
//! the same (user, item) pair never produce two rows.

use sqlx::PgPool;
use pathway_core::progress::ProgressTarget;
use pathway_core::types::DbId;

use crate::models::progress::{Progress, ProgressEntry};

const COLUMNS: &str = "id, completed, score, completed_at, user_id, lesson_id, question_id, \
    created_at, updated_at";

/// Same columns qualified with the `pr` alias used by joined queries.
const PREFIXED_COLUMNS: &str = "pr.id, pr.completed, pr.score, pr.completed_at, pr.user_id, \
    pr.lesson_id, pr.question_id, pr.created_at, pr.updated_at";

/// Provides upsert, listing, and aggregate queries for progress rows.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Create or update the progress row for `user_id` on `target`.
    ///
    /// - `completed: None` keeps the stored value (new rows start incomplete).
    /// - `score: None` keeps the stored score.
    /// - `completed_at` is stamped when the row becomes complete, kept while it
    ///   stays complete, and cleared when it is marked incomplete.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        target: ProgressTarget,
        completed: Option<bool>,
        score: Option<i32>,
    ) -> Result<Progress, sqlx::Error> {
        let constraint = match target {
            ProgressTarget::Lesson(_) => "uq_progress_user_lesson",
            ProgressTarget::Question(_) => "uq_progress_user_question",
        };
        let query = format!(
            "INSERT INTO progress (user_id, lesson_id, question_id, completed, score, completed_at)
             VALUES ($1, $2, $3, COALESCE($4, FALSE), $5,
                     CASE WHEN $4 THEN NOW() ELSE NULL END)
             ON CONFLICT ON CONSTRAINT {constraint} DO UPDATE SET
                completed = COALESCE($4, progress.completed),
                score = COALESCE($5, progress.score),
                completed_at = CASE
                    WHEN $4 IS NULL THEN progress.completed_at
                    WHEN $4 THEN COALESCE(progress.completed_at, NOW())
                    ELSE NULL
                END
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .bind(target.lesson_id())
            .bind(target.question_id())
            .bind(completed)
            .bind(score)
            .fetch_one(pool)
            .await
    }

    /// List a user's progress with the tracked item and its path, most
    /// recently updated first.
    pub async fn list_entries_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProgressEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS},
                    COALESCE(l.title, q.question) AS item_title,
                    t.id AS topic_id,
                    p.id AS path_id,
                    p.title AS path_title
             FROM progress pr
             LEFT JOIN lessons l ON l.id = pr.lesson_id
             LEFT JOIN questions q ON q.id = pr.question_id
             LEFT JOIN topics t ON t.id = COALESCE(l.topic_id, q.topic_id)
             LEFT JOIN paths p ON p.id = t.path_id
             WHERE pr.user_id = $1
             ORDER BY pr.updated_at DESC, pr.id"
        );
        sqlx::query_as::<_, ProgressEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count a user's progress rows, optionally only those with the given
    /// `completed` flag.
    pub async fn count_by_user(
        pool: &PgPool,
        user_id: DbId,
        completed: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM progress
             WHERE user_id = $1 AND ($2::BOOLEAN IS NULL OR completed = $2)",
        )
        .bind(user_id)
        .bind(completed)
        .fetch_one(pool)
        .await
    }

    /// Mean score over the user's completed rows. `None` when no completed
    /// row carries a score.
    pub async fn average_completed_score(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT AVG(score)::FLOAT8 FROM progress
             WHERE user_id = $1 AND completed",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM progress WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM progress WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}

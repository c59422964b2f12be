//! Repository for the `lessons` table.

use sqlx::{PgExecutor, PgPool};
use pathway_core::types::DbId;

use crate::models::lesson::{CreateLesson, Lesson, LessonFilter, UpdateLesson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, content, lesson_type, duration, \
    sort_order, topic_id, created_at, updated_at";

/// Provides CRUD operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Insert a new lesson under `topic_id`, returning the created row.
    ///
    /// If `sort_order` is `None` in the input, defaults to 0.
    pub async fn create<'e, E>(
        executor: E,
        topic_id: DbId,
        input: &CreateLesson,
    ) -> Result<Lesson, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO lessons
                (title, description, content, lesson_type, duration, sort_order, topic_id)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.lesson_type)
            .bind(&input.duration)
            .bind(input.sort_order)
            .bind(topic_id)
            .fetch_one(executor)
            .await
    }

    /// Find a lesson by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List lessons, optionally restricted to one topic.
    pub async fn list(pool: &PgPool, filter: &LessonFilter) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lessons
             WHERE ($1::UUID IS NULL OR topic_id = $1)
             ORDER BY topic_id, sort_order, created_at"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(filter.topic_id)
            .fetch_all(pool)
            .await
    }

    /// List the lessons of several topics in one query, ascending by `order`
    /// within each topic.
    pub async fn list_by_topics(
        pool: &PgPool,
        topic_ids: &[DbId],
    ) -> Result<Vec<Lesson>, sqlx::Error> {
        if topic_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM lessons
             WHERE topic_id = ANY($1)
             ORDER BY topic_id, sort_order, created_at"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(topic_ids)
            .fetch_all(pool)
            .await
    }

    /// Update a lesson. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLesson,
    ) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!(
            "UPDATE lessons SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                content = COALESCE($4, content),
                lesson_type = COALESCE($5, lesson_type),
                duration = COALESCE($6, duration),
                sort_order = COALESCE($7, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.lesson_type)
            .bind(&input.duration)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lesson (its progress rows cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lessons WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}

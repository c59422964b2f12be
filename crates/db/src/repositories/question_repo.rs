//! Repository for the `questions` table.

use sqlx::PgPool;
use pathway_core::types::DbId;

use crate::models::question::{CreateQuestion, Question, QuestionFilter, UpdateQuestion};

const COLUMNS: &str = "id, question, answer, difficulty, question_type, topic_id, \
    created_at, updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    ///
    /// Omitted `difficulty` and `type` fall back to `medium` and `quiz`.
    pub async fn create(
        pool: &PgPool,
        topic_id: DbId,
        input: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, difficulty, question_type, topic_id)
             VALUES ($1, $2, COALESCE($3, 'medium'), COALESCE($4, 'quiz'), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.difficulty)
            .bind(&input.question_type)
            .bind(topic_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List questions matching every supplied filter, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &QuestionFilter,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::TEXT IS NULL OR question_type = $1)
               AND ($2::TEXT IS NULL OR difficulty = $2)
               AND ($3::UUID IS NULL OR topic_id = $3)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&filter.question_type)
            .bind(&filter.difficulty)
            .bind(filter.topic_id)
            .fetch_all(pool)
            .await
    }

    /// List the questions of several topics in one query.
    pub async fn list_by_topics(
        pool: &PgPool,
        topic_ids: &[DbId],
    ) -> Result<Vec<Question>, sqlx::Error> {
        if topic_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE topic_id = ANY($1)
             ORDER BY topic_id, created_at"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(topic_ids)
            .fetch_all(pool)
            .await
    }

    /// Update a question. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                difficulty = COALESCE($4, difficulty),
                question_type = COALESCE($5, question_type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.difficulty)
            .bind(&input.question_type)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}

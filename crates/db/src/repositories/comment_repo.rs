//! Repository for the `comments` table.

use sqlx::PgPool;
use pathway_core::types::DbId;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};

const COLUMNS: &str = "id, content, discussion_id, user_id, created_at, updated_at";

pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(
        pool: &PgPool,
        discussion_id: DbId,
        user_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (content, discussion_id, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.content)
            .bind(discussion_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// List a discussion's comments with their authors, oldest first.
    pub async fn list_by_discussion(
        pool: &PgPool,
        discussion_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.content, c.discussion_id, c.user_id, c.created_at, c.updated_at,
                    u.name AS author_name, u.email AS author_email
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.discussion_id = $1
             ORDER BY c.created_at ASC, c.id",
        )
        .bind(discussion_id)
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}

//! Repository for the `discussions` table.

use sqlx::PgPool;
use pathway_core::types::DbId;

use crate::fetch::DiscussionFetch;
use crate::models::discussion::{
    CreateDiscussion, Discussion, DiscussionDetail, DiscussionSummary,
};
use crate::repositories::{CommentRepo, UserRepo};

const COLUMNS: &str = "id, title, content, path_id, user_id, is_pinned, created_at, updated_at";

const PREFIXED_COLUMNS: &str = "d.id, d.title, d.content, d.path_id, d.user_id, d.is_pinned, \
    d.created_at, d.updated_at";

/// Provides CRUD operations for path discussions.
pub struct DiscussionRepo;

impl DiscussionRepo {
    /// Start a discussion on `path_id` authored by `user_id`.
    pub async fn create(
        pool: &PgPool,
        path_id: DbId,
        user_id: DbId,
        input: &CreateDiscussion,
    ) -> Result<Discussion, sqlx::Error> {
        let query = format!(
            "INSERT INTO discussions (title, content, path_id, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Discussion>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(path_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Discussion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM discussions WHERE id = $1");
        sqlx::query_as::<_, Discussion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a discussion and load the associations named by `fetch`.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        fetch: DiscussionFetch,
    ) -> Result<Option<DiscussionDetail>, sqlx::Error> {
        let Some(discussion) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let author = if fetch.author {
            UserRepo::find_summary(pool, discussion.user_id).await?
        } else {
            None
        };
        let comments = if fetch.comments {
            Some(CommentRepo::list_by_discussion(pool, discussion.id).await?)
        } else {
            None
        };

        Ok(Some(DiscussionDetail {
            discussion,
            author,
            comments,
        }))
    }

    /// List the discussions of a path: pinned first, then newest first.
    pub async fn list_by_path(
        pool: &PgPool,
        path_id: DbId,
    ) -> Result<Vec<DiscussionSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS},
                    u.name AS author_name,
                    u.email AS author_email,
                    (SELECT COUNT(*) FROM comments c WHERE c.discussion_id = d.id) AS comment_count
             FROM discussions d
             JOIN users u ON u.id = d.user_id
             WHERE d.path_id = $1
             ORDER BY d.is_pinned DESC, d.created_at DESC"
        );
        sqlx::query_as::<_, DiscussionSummary>(&query)
            .bind(path_id)
            .fetch_all(pool)
            .await
    }

    /// Pin or unpin a discussion. Returns `None` if it does not exist.
    pub async fn set_pinned(
        pool: &PgPool,
        id: DbId,
        is_pinned: bool,
    ) -> Result<Option<Discussion>, sqlx::Error> {
        let query = format!(
            "UPDATE discussions SET is_pinned = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Discussion>(&query)
            .bind(id)
            .bind(is_pinned)
            .fetch_optional(pool)
            .await
    }

    /// Delete a discussion (its comments cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM discussions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM discussions WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}

//! Repository for the `paths` table.

use sqlx::{PgExecutor, PgPool};
use pathway_core::types::DbId;

use crate::fetch::PathFetch;
use crate::models::path::{NewPath, Path, PathDetail, PathFilter, UpdatePath};
use crate::repositories::{TopicRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, difficulty, category, user_id, published, created_at, updated_at";

/// Provides CRUD operations for learning paths.
pub struct PathRepo;

impl PathRepo {
    /// Insert a new path, returning the created row.
    ///
    /// Runs on whatever executor is passed: the pool, or a transaction when
    /// the path is part of a larger publish.
    pub async fn create<'e, E>(executor: E, input: &NewPath) -> Result<Path, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO paths (title, description, difficulty, category, user_id, published)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Path>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.difficulty.as_str())
            .bind(&input.category)
            .bind(input.user_id)
            .bind(input.published)
            .fetch_one(executor)
            .await
    }

    /// Find a path row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Path>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM paths WHERE id = $1");
        sqlx::query_as::<_, Path>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a path and load the associations named by `fetch`.
    ///
    /// Topics come back ascending by `order`, each with its lessons (by
    /// `order`) and questions (by creation time) when requested.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        fetch: PathFetch,
    ) -> Result<Option<PathDetail>, sqlx::Error> {
        let Some(path) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let author = if fetch.author {
            UserRepo::find_summary(pool, path.user_id).await?
        } else {
            None
        };

        let topics = match fetch.topics {
            Some(topic_fetch) => {
                Some(TopicRepo::list_details_by_path(pool, path.id, topic_fetch).await?)
            }
            None => None,
        };

        Ok(Some(PathDetail {
            path,
            author,
            topics,
        }))
    }

    /// List paths matching `filter`, most recently created first.
    ///
    /// Every filter field is optional; `search` is a case-insensitive title
    /// substring match.
    pub async fn list(pool: &PgPool, filter: &PathFilter) -> Result<Vec<Path>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM paths
             WHERE ($1::TEXT IS NULL OR category = $1)
               AND ($2::TEXT IS NULL OR difficulty = $2)
               AND ($3::BOOLEAN IS NULL OR published = $3)
               AND ($4::UUID IS NULL OR user_id = $4)
               AND ($5::TEXT IS NULL OR title ILIKE '%' || $5 || '%')
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Path>(&query)
            .bind(&filter.category)
            .bind(&filter.difficulty)
            .bind(filter.published)
            .bind(filter.user_id)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// List every path authored by a user, drafts included, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Path>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM paths WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Path>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a path. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePath,
    ) -> Result<Option<Path>, sqlx::Error> {
        let query = format!(
            "UPDATE paths SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                difficulty = COALESCE($4, difficulty),
                category = COALESCE($5, category),
                published = COALESCE($6, published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Path>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.difficulty)
            .bind(&input.category)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a path. Topics, lessons, questions, their progress rows, and
    /// discussions go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM paths WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a path exists without fetching the row.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM paths WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}

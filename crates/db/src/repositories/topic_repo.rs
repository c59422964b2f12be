//! Repository for the `topics` table.

use std::collections::HashMap;

use sqlx::{PgExecutor, PgPool};
use pathway_core::types::DbId;

use crate::fetch::TopicFetch;
use crate::models::lesson::Lesson;
use crate::models::question::Question;
use crate::models::topic::{CreateTopic, Topic, TopicDetail, TopicFilter, UpdateTopic};
use crate::repositories::{LessonRepo, QuestionRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, sort_order, path_id, created_at, updated_at";

/// Provides CRUD operations for topics.
pub struct TopicRepo;

impl TopicRepo {
    /// Insert a new topic under `path_id`, returning the created row.
    ///
    /// If `sort_order` is `None` in the input, defaults to 0.
    pub async fn create<'e, E>(
        executor: E,
        path_id: DbId,
        input: &CreateTopic,
    ) -> Result<Topic, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO topics (title, description, sort_order, path_id)
             VALUES ($1, $2, COALESCE($3, 0), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .bind(path_id)
            .fetch_one(executor)
            .await
    }

    /// Find a topic by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a topic and load the associations named by `fetch`.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        fetch: TopicFetch,
    ) -> Result<Option<TopicDetail>, sqlx::Error> {
        let Some(topic) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let ids = [topic.id];

        let lessons = if fetch.lessons {
            Some(LessonRepo::list_by_topics(pool, &ids).await?)
        } else {
            None
        };
        let questions = if fetch.questions {
            Some(QuestionRepo::list_by_topics(pool, &ids).await?)
        } else {
            None
        };

        Ok(Some(TopicDetail {
            topic,
            lessons,
            questions,
        }))
    }

    /// List topics, optionally restricted to one path.
    ///
    /// Ordered by path, then ascending `order`.
    pub async fn list(pool: &PgPool, filter: &TopicFilter) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topics
             WHERE ($1::UUID IS NULL OR path_id = $1)
             ORDER BY path_id, sort_order, created_at"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(filter.path_id)
            .fetch_all(pool)
            .await
    }

    /// List the topics of a path, ascending by `order`.
    pub async fn list_by_path(pool: &PgPool, path_id: DbId) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topics WHERE path_id = $1 ORDER BY sort_order, created_at"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(path_id)
            .fetch_all(pool)
            .await
    }

    /// List the topics of a path with their children, loading each child
    /// table in a single query rather than once per topic.
    pub async fn list_details_by_path(
        pool: &PgPool,
        path_id: DbId,
        fetch: TopicFetch,
    ) -> Result<Vec<TopicDetail>, sqlx::Error> {
        let topics = Self::list_by_path(pool, path_id).await?;
        let ids: Vec<DbId> = topics.iter().map(|t| t.id).collect();

        let mut lessons = if fetch.lessons {
            group_by_topic(LessonRepo::list_by_topics(pool, &ids).await?, |l: &Lesson| {
                l.topic_id
            })
        } else {
            HashMap::new()
        };
        let mut questions = if fetch.questions {
            group_by_topic(
                QuestionRepo::list_by_topics(pool, &ids).await?,
                |q: &Question| q.topic_id,
            )
        } else {
            HashMap::new()
        };

        Ok(topics
            .into_iter()
            .map(|topic| TopicDetail {
                lessons: fetch
                    .lessons
                    .then(|| lessons.remove(&topic.id).unwrap_or_default()),
                questions: fetch
                    .questions
                    .then(|| questions.remove(&topic.id).unwrap_or_default()),
                topic,
            })
            .collect())
    }

    /// Update a topic. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTopic,
    ) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!(
            "UPDATE topics SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a topic (lessons, questions, and their progress cascade).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}

/// Bucket already-ordered rows by their topic, keeping their order.
fn group_by_topic<T>(rows: Vec<T>, topic_of: impl Fn(&T) -> DbId) -> HashMap<DbId, Vec<T>> {
    let mut grouped: HashMap<DbId, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(topic_of(&row)).or_default().push(row);
    }
    grouped
}

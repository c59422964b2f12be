use pathway_core::types::DbId;
use pathway_db::fetch::TopicFetch;
use pathway_db::models::topic::{CreateTopic, Topic, TopicDetail, TopicFilter, UpdateTopic};
use pathway_db::repositories::{PathRepo, TopicRepo};
use sqlx::PgPool;

use super::required;
use crate::error::{AppError, AppResult};

pub async fn list(pool: &PgPool, filter: &TopicFilter) -> AppResult<Vec<Topic>> {
    Ok(TopicRepo::list(pool, filter).await?)
}

/// A topic with its lessons and questions.
pub async fn get(pool: &PgPool, id: DbId) -> AppResult<TopicDetail> {
    TopicRepo::find_detail(pool, id, TopicFetch::FULL)
        .await?
        .ok_or(AppError::not_found("Topic", id))
}

pub async fn create(pool: &PgPool, input: &CreateTopic) -> AppResult<Topic> {
    let path_id = required(input.path_id, "pathId")?;
    if !PathRepo::exists(pool, path_id).await? {
        return Err(AppError::not_found("Path", path_id));
    }
    let topic = TopicRepo::create(pool, path_id, input).await?;
    tracing::info!(topic_id = %topic.id, path_id = %topic.path_id, "Topic created");
    Ok(topic)
}

pub async fn update(pool: &PgPool, id: DbId, input: &UpdateTopic) -> AppResult<Topic> {
    let topic = TopicRepo::update(pool, id, input)
        .await?
        .ok_or(AppError::not_found("Topic", id))?;
    tracing::info!(topic_id = %id, "Topic updated");
    Ok(topic)
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !TopicRepo::exists(pool, id).await? {
        return Err(AppError::not_found("Topic", id));
    }
    TopicRepo::delete(pool, id).await?;
    tracing::info!(topic_id = %id, "Topic deleted");
    Ok(())
}

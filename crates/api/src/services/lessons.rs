use pathway_core::types::DbId;
use pathway_db::models::lesson::{CreateLesson, Lesson, LessonFilter, UpdateLesson};
use pathway_db::repositories::{LessonRepo, TopicRepo};
use sqlx::PgPool;

use super::required;
use crate::error::{AppError, AppResult};

pub async fn list(pool: &PgPool, filter: &LessonFilter) -> AppResult<Vec<Lesson>> {
    Ok(LessonRepo::list(pool, filter).await?)
}

pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Lesson> {
    LessonRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::not_found("Lesson", id))
}

pub async fn create(pool: &PgPool, input: &CreateLesson) -> AppResult<Lesson> {
    let topic_id = required(input.topic_id, "topicId")?;
    if !TopicRepo::exists(pool, topic_id).await? {
        return Err(AppError::not_found("Topic", topic_id));
    }
    let lesson = LessonRepo::create(pool, topic_id, input).await?;
    tracing::info!(lesson_id = %lesson.id, topic_id = %lesson.topic_id, "Lesson created");
    Ok(lesson)
}

pub async fn update(pool: &PgPool, id: DbId, input: &UpdateLesson) -> AppResult<Lesson> {
    let lesson = LessonRepo::update(pool, id, input)
        .await?
        .ok_or(AppError::not_found("Lesson", id))?;
    tracing::info!(lesson_id = %id, "Lesson updated");
    Ok(lesson)
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !LessonRepo::exists(pool, id).await? {
        return Err(AppError::not_found("Lesson", id));
    }
    LessonRepo::delete(pool, id).await?;
    tracing::info!(lesson_id = %id, "Lesson deleted");
    Ok(())
}

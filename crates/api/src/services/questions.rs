use pathway_core::types::DbId;
use pathway_db::models::question::{CreateQuestion, Question, QuestionFilter, UpdateQuestion};
use pathway_db::repositories::{QuestionRepo, TopicRepo};
use sqlx::PgPool;

use super::required;
use crate::error::{AppError, AppResult};

pub async fn list(pool: &PgPool, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
    Ok(QuestionRepo::list(pool, filter).await?)
}

pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Question> {
    QuestionRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::not_found("Question", id))
}

/// Difficulty defaults to `medium` and type to `quiz`.
pub async fn create(pool: &PgPool, input: &CreateQuestion) -> AppResult<Question> {
    let topic_id = required(input.topic_id, "topicId")?;
    if !TopicRepo::exists(pool, topic_id).await? {
        return Err(AppError::not_found("Topic", topic_id));
    }
    let question = QuestionRepo::create(pool, topic_id, input).await?;
    tracing::info!(question_id = %question.id, topic_id = %question.topic_id, "Question created");
    Ok(question)
}

pub async fn update(pool: &PgPool, id: DbId, input: &UpdateQuestion) -> AppResult<Question> {
    let question = QuestionRepo::update(pool, id, input)
        .await?
        .ok_or(AppError::not_found("Question", id))?;
    tracing::info!(question_id = %id, "Question updated");
    Ok(question)
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !QuestionRepo::exists(pool, id).await? {
        return Err(AppError::not_found("Question", id));
    }
    QuestionRepo::delete(pool, id).await?;
    tracing::info!(question_id = %id, "Question deleted");
    Ok(())
}

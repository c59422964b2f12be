//! Question entity model and DTOs.

use pathway_core::question::{validate_question_difficulty, validate_question_kind};
use pathway_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A question row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub difficulty: String,
    #[serde(rename = "type")]
    pub question_type: String,
    pub topic_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestion {
    #[serde(default)]
    #[validate(length(min = 3, message = "Question must be at least 3 characters"))]
    pub question: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,
    /// Defaults to `medium` if omitted.
    #[validate(custom(function = "validate_question_difficulty"))]
    pub difficulty: Option<String>,
    /// Defaults to `quiz` if omitted.
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_question_kind"))]
    pub question_type: Option<String>,
    #[validate(required(message = "Required"))]
    pub topic_id: Option<DbId>,
}

/// DTO for updating an existing question. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestion {
    #[validate(length(min = 3, message = "Question must be at least 3 characters"))]
    pub question: Option<String>,
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: Option<String>,
    #[validate(custom(function = "validate_question_difficulty"))]
    pub difficulty: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_question_kind"))]
    pub question_type: Option<String>,
}

/// Optional filters for listing questions (`?type=&difficulty=&topicId=`).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilter {
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_question_kind"))]
    pub question_type: Option<String>,
    #[validate(custom(function = "validate_question_difficulty"))]
    pub difficulty: Option<String>,
    pub topic_id: Option<DbId>,
}

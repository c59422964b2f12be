//! Lesson entity model and DTOs.

use pathway_core::lesson::validate_lesson_type;
use pathway_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A lesson row from the `lessons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// A URL or a text body, depending on the lesson type.
    pub content: String,
    #[serde(rename = "type")]
    pub lesson_type: String,
    /// Free text, e.g. `"12:30"` or `"1h"`.
    pub duration: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub topic_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new lesson.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLesson {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    #[validate(custom(function = "validate_lesson_type"))]
    pub lesson_type: String,
    pub duration: Option<String>,
    /// Defaults to 0 if omitted.
    #[serde(rename = "order")]
    #[validate(range(min = 0, message = "Order must not be negative"))]
    pub sort_order: Option<i32>,
    #[validate(required(message = "Required"))]
    pub topic_id: Option<DbId>,
}

/// DTO for updating an existing lesson. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLesson {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_lesson_type"))]
    pub lesson_type: Option<String>,
    pub duration: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0, message = "Order must not be negative"))]
    pub sort_order: Option<i32>,
}

/// Optional filters for listing lessons (`?topicId=`).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LessonFilter {
    pub topic_id: Option<DbId>,
}

/// One lesson inside a module of a published path tree.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublishLesson {
    #[serde(default)]
    #[validate(length(min = 1, message = "Lesson title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    #[validate(custom(function = "validate_lesson_type"))]
    pub lesson_type: String,
    pub duration: Option<String>,
    #[serde(default)]
    pub content: String,
}

//! Topic (path module) entity model and DTOs.

use pathway_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::lesson::Lesson;
use crate::models::question::Question;

/// A topic row from the `topics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// Display position within the path, ascending.
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub path_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A topic with the associations requested by a [`crate::fetch::TopicFetch`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetail {
    #[serde(flatten)]
    pub topic: Topic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
}

/// DTO for creating a new topic.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopic {
    #[serde(default)]
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to 0 if omitted.
    #[serde(rename = "order")]
    #[validate(range(min = 0, message = "Order must not be negative"))]
    pub sort_order: Option<i32>,
    #[validate(required(message = "Required"))]
    pub path_id: Option<DbId>,
}

/// DTO for updating an existing topic. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopic {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "order")]
    #[validate(range(min = 0, message = "Order must not be negative"))]
    pub sort_order: Option<i32>,
}

/// Optional filters for listing topics (`?pathId=`).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TopicFilter {
    pub path_id: Option<DbId>,
}

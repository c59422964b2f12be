//! Learning path entity model and DTOs.

use pathway_core::path::{validate_difficulty, PathDifficulty};
use pathway_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::lesson::PublishLesson;
use crate::models::topic::TopicDetail;
use crate::models::user::UserSummary;

/// A path row from the `paths` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: String,
    pub category: String,
    pub user_id: DbId,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A path with the associations requested by a [`crate::fetch::PathFetch`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDetail {
    #[serde(flatten)]
    pub path: Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<TopicDetail>>,
}

/// DTO for creating a single path row.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePath {
    #[serde(default)]
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,
    pub category: Option<String>,
    #[validate(required(message = "Required"))]
    pub user_id: Option<DbId>,
    pub published: Option<bool>,
}

/// DTO for updating an existing path. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePath {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
}

/// Fully resolved insert for the `paths` table. Defaults are applied by the
/// caller before this is built.
#[derive(Debug, Clone)]
pub struct NewPath {
    pub title: String,
    pub description: Option<String>,
    pub difficulty: PathDifficulty,
    pub category: String,
    pub user_id: DbId,
    pub published: bool,
}

/// Optional filters for listing paths (`?category=&difficulty=&published=&userId=&search=`).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PathFilter {
    pub category: Option<String>,
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,
    pub published: Option<bool>,
    pub user_id: Option<DbId>,
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
}

/// A whole path tree submitted by the path builder: path fields, then
/// modules in display order, each with lessons in display order.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublishPath {
    #[serde(default)]
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,
    /// `false` saves a draft. Defaults to `true`.
    pub published: Option<bool>,
    #[serde(default)]
    #[validate(nested)]
    pub modules: Vec<PublishModule>,
}

/// One module of a [`PublishPath`]; stored as a topic, so it follows the
/// topic title rule.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublishModule {
    #[serde(default)]
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub lessons: Vec<PublishLesson>,
}

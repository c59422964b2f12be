//! Discussion entity model and DTOs.

use pathway_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::comment::CommentWithAuthor;
use crate::models::user::UserSummary;

/// A discussion row from the `discussions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub path_id: DbId,
    pub user_id: DbId,
    pub is_pinned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Discussion list item: the row plus author name and comment count.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub discussion: Discussion,
    pub author_name: Option<String>,
    pub author_email: String,
    pub comment_count: i64,
}

/// A discussion with the associations requested by a [`crate::fetch::DiscussionFetch`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionDetail {
    #[serde(flatten)]
    pub discussion: Discussion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentWithAuthor>>,
}

/// DTO for starting a discussion. Path and author come from the route and session.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiscussion {
    #[serde(default)]
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Request body for `PUT /discussions/{id}/pin`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetPinned {
    pub is_pinned: bool,
}

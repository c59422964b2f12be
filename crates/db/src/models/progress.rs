//! Progress entity model and DTOs.

use pathway_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A progress row from the `progress` table.
///
/// Exactly one of `lesson_id` / `question_id` is set.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub id: DbId,
    pub completed: bool,
    pub score: Option<i32>,
    pub completed_at: Option<Timestamp>,
    pub user_id: DbId,
    pub lesson_id: Option<DbId>,
    pub question_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A progress row with the item it tracks and the path that item belongs to.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub progress: Progress,
    /// Lesson title or question text.
    pub item_title: Option<String>,
    pub topic_id: Option<DbId>,
    pub path_id: Option<DbId>,
    pub path_title: Option<String>,
}

/// Upsert request for `POST /progress`. One of `lesson_id` / `question_id` is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProgress {
    #[validate(required(message = "Required"))]
    pub user_id: Option<DbId>,
    pub lesson_id: Option<DbId>,
    pub question_id: Option<DbId>,
    /// Omitted keeps the stored value (new rows start incomplete).
    pub completed: Option<bool>,
    #[validate(range(min = 0, message = "Score must not be negative"))]
    pub score: Option<i32>,
}

//! Platform-wide totals for the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: i64,
    pub total_paths: i64,
    pub total_questions: i64,
    /// Progress rows marked completed, lessons and questions alike.
    pub completed_progress: i64,
}

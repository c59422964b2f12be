//! Progress tracking: the atomic upsert and per-user statistics.

use pathway_core::progress::{ProgressStats, ProgressTarget};
use pathway_core::types::DbId;
use pathway_db::models::progress::{Progress, ProgressEntry, UpsertProgress};
use pathway_db::repositories::{LessonRepo, ProgressRepo, QuestionRepo, UserRepo};
use sqlx::PgPool;

use super::required;
use crate::error::{AppError, AppResult};

/// Record progress for one user on one lesson or question.
///
/// Exactly one of `lessonId` / `questionId` must be given. The write is a
/// single insert-or-update statement, so concurrent calls for the same pair
/// still leave one row.
pub async fn upsert(pool: &PgPool, input: &UpsertProgress) -> AppResult<Progress> {
    let target = ProgressTarget::from_ids(input.lesson_id, input.question_id)?;

    let user_id = required(input.user_id, "userId")?;
    if !UserRepo::exists(pool, user_id).await? {
        return Err(AppError::not_found("User", user_id));
    }
    let target_exists = match target {
        ProgressTarget::Lesson(id) => LessonRepo::exists(pool, id).await?,
        ProgressTarget::Question(id) => QuestionRepo::exists(pool, id).await?,
    };
    if !target_exists {
        return Err(AppError::not_found(target.entity(), target.id()));
    }

    let progress =
        ProgressRepo::upsert(pool, user_id, target, input.completed, input.score).await?;
    tracing::info!(
        progress_id = %progress.id,
        user_id = %progress.user_id,
        target = target.entity(),
        target_id = %target.id(),
        completed = progress.completed,
        "Progress recorded"
    );
    Ok(progress)
}

/// A user's progress rows, most recently updated first.
pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> AppResult<Vec<ProgressEntry>> {
    if !UserRepo::exists(pool, user_id).await? {
        return Err(AppError::not_found("User", user_id));
    }
    Ok(ProgressRepo::list_entries_by_user(pool, user_id).await?)
}

/// Totals, completion rate, and mean score over completed rows.
pub async fn stats(pool: &PgPool, user_id: DbId) -> AppResult<ProgressStats> {
    if !UserRepo::exists(pool, user_id).await? {
        return Err(AppError::not_found("User", user_id));
    }
    let total = ProgressRepo::count_by_user(pool, user_id, None).await?;
    let completed = ProgressRepo::count_by_user(pool, user_id, Some(true)).await?;
    let average_score = ProgressRepo::average_completed_score(pool, user_id).await?;
    Ok(ProgressStats::from_counts(total, completed, average_score))
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !ProgressRepo::exists(pool, id).await? {
        return Err(AppError::not_found("Progress", id));
    }
    ProgressRepo::delete(pool, id).await?;
    tracing::info!(progress_id = %id, "Progress deleted");
    Ok(())
}

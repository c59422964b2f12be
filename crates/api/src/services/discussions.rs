//! Path discussions and their comments.

use pathway_core::types::DbId;
use pathway_db::fetch::DiscussionFetch;
use pathway_db::models::comment::{Comment, CreateComment};
use pathway_db::models::discussion::{
    CreateDiscussion, Discussion, DiscussionDetail, DiscussionSummary,
};
use pathway_db::repositories::{CommentRepo, DiscussionRepo, PathRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Discussions on a path, pinned first.
pub async fn list_by_path(pool: &PgPool, path_id: DbId) -> AppResult<Vec<DiscussionSummary>> {
    if !PathRepo::exists(pool, path_id).await? {
        return Err(AppError::not_found("Path", path_id));
    }
    Ok(DiscussionRepo::list_by_path(pool, path_id).await?)
}

/// A discussion with its author and comments.
pub async fn get(pool: &PgPool, id: DbId) -> AppResult<DiscussionDetail> {
    DiscussionRepo::find_detail(pool, id, DiscussionFetch::FULL)
        .await?
        .ok_or(AppError::not_found("Discussion", id))
}

pub async fn create(
    pool: &PgPool,
    path_id: DbId,
    author_id: DbId,
    input: &CreateDiscussion,
) -> AppResult<Discussion> {
    if !PathRepo::exists(pool, path_id).await? {
        return Err(AppError::not_found("Path", path_id));
    }
    let discussion = DiscussionRepo::create(pool, path_id, author_id, input).await?;
    tracing::info!(
        discussion_id = %discussion.id,
        path_id = %path_id,
        user_id = %author_id,
        "Discussion created"
    );
    Ok(discussion)
}

pub async fn set_pinned(pool: &PgPool, id: DbId, is_pinned: bool) -> AppResult<Discussion> {
    let discussion = DiscussionRepo::set_pinned(pool, id, is_pinned)
        .await?
        .ok_or(AppError::not_found("Discussion", id))?;
    tracing::info!(discussion_id = %id, is_pinned, "Discussion pin changed");
    Ok(discussion)
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !DiscussionRepo::exists(pool, id).await? {
        return Err(AppError::not_found("Discussion", id));
    }
    DiscussionRepo::delete(pool, id).await?;
    tracing::info!(discussion_id = %id, "Discussion deleted");
    Ok(())
}

pub async fn add_comment(
    pool: &PgPool,
    discussion_id: DbId,
    author_id: DbId,
    input: &CreateComment,
) -> AppResult<Comment> {
    if !DiscussionRepo::exists(pool, discussion_id).await? {
        return Err(AppError::not_found("Discussion", discussion_id));
    }
    let comment = CommentRepo::create(pool, discussion_id, author_id, input).await?;
    tracing::info!(
        comment_id = %comment.id,
        discussion_id = %discussion_id,
        user_id = %author_id,
        "Comment added"
    );
    Ok(comment)
}

pub async fn delete_comment(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !CommentRepo::exists(pool, id).await? {
        return Err(AppError::not_found("Comment", id));
    }
    CommentRepo::delete(pool, id).await?;
    tracing::info!(comment_id = %id, "Comment deleted");
    Ok(())
}

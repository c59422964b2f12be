//! Handlers for discussions (scoped under paths) and their comments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pathway_core::types::DbId;
use pathway_db::models::comment::{Comment, CreateComment};
use pathway_db::models::discussion::{
    CreateDiscussion, Discussion, DiscussionDetail, DiscussionSummary, SetPinned,
};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::middleware::validation::{ValidatedJson, ValidatedPath};
use crate::response::DataResponse;
use crate::services::discussions;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Discussions
// ---------------------------------------------------------------------------

/// GET /api/v1/paths/{path_id}/discussions
pub async fn list_by_path(
    State(state): State<AppState>,
    ValidatedPath(path_id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<DiscussionSummary>>>> {
    let data = discussions::list_by_path(&state.pool, path_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/paths/{path_id}/discussions
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedPath(path_id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateDiscussion>,
) -> AppResult<(StatusCode, Json<DataResponse<Discussion>>)> {
    let data = discussions::create(&state.pool, path_id, auth_user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// GET /api/v1/discussions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<DiscussionDetail>>> {
    let data = discussions::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/discussions/{id}/pin
pub async fn set_pinned(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<SetPinned>,
) -> AppResult<Json<DataResponse<Discussion>>> {
    let data = discussions::set_pinned(&state.pool, id, input.is_pinned).await?;
    tracing::debug!(admin_id = %admin.user_id, discussion_id = %id, "Pin set by admin");
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/discussions/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    discussions::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// POST /api/v1/discussions/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedPath(discussion_id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    let data =
        discussions::add_comment(&state.pool, discussion_id, auth_user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    discussions::delete_comment(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

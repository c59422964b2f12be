//! Handlers for the `/progress` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pathway_core::progress::ProgressStats;
use pathway_core::types::DbId;
use pathway_db::models::progress::{Progress, ProgressEntry, UpsertProgress};

use crate::error::AppResult;
use crate::middleware::validation::{ValidatedJson, ValidatedPath};
use crate::response::DataResponse;
use crate::services::progress;
use crate::state::AppState;

/// GET /api/v1/progress/user/{user_id}
pub async fn list_for_user(
    State(state): State<AppState>,
    ValidatedPath(user_id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProgressEntry>>>> {
    let data = progress::list_for_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/progress/user/{user_id}/stats
pub async fn stats(
    State(state): State<AppState>,
    ValidatedPath(user_id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<ProgressStats>>> {
    let data = progress::stats(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/progress
///
/// Create or update the row for `(userId, lessonId | questionId)`. Always
/// 200: the caller cannot tell, and need not care, whether a row existed.
pub async fn upsert(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpsertProgress>,
) -> AppResult<Json<DataResponse<Progress>>> {
    let data = progress::upsert(&state.pool, &input).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/progress/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    progress::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

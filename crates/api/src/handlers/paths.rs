//! Handlers for the `/paths` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pathway_core::types::DbId;
use pathway_db::models::path::{CreatePath, Path, PathDetail, PathFilter, PublishPath, UpdatePath};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::response::DataResponse;
use crate::services::paths;
use crate::state::AppState;

/// GET /api/v1/paths
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<PathFilter>,
) -> AppResult<Json<DataResponse<Vec<Path>>>> {
    let data = paths::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/paths/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<PathDetail>>> {
    let data = paths::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/paths
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePath>,
) -> AppResult<(StatusCode, Json<DataResponse<Path>>)> {
    let data = paths::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// POST /api/v1/paths/publish
///
/// Store a whole path tree authored by the caller in one transaction.
pub async fn publish(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<PublishPath>,
) -> AppResult<(StatusCode, Json<DataResponse<PathDetail>>)> {
    let data = paths::publish(&state.pool, auth_user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PUT /api/v1/paths/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePath>,
) -> AppResult<Json<DataResponse<Path>>> {
    let data = paths::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/paths/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    paths::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pathway_core::types::DbId;
use pathway_db::models::path::Path;
use pathway_db::models::user::{CreateUser, UpdateUser, User, UserDetail, UserWithCounts};

use crate::error::AppResult;
use crate::middleware::validation::{ValidatedJson, ValidatedPath};
use crate::response::DataResponse;
use crate::services::users;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<UserWithCounts>>>> {
    let data = users::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<UserDetail>>> {
    let data = users::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    let data = users::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> AppResult<Json<DataResponse<User>>> {
    let data = users::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    users::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/{id}/paths
pub async fn list_paths(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Path>>>> {
    let data = users::list_paths(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

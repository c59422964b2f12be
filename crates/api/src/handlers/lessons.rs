//! Handlers for the `/lessons` resource.
//!
//! Lessons are ordered within their topic by `order`; omitting it on create
//! stores 0.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pathway_core::types::DbId;
use pathway_db::models::lesson::{CreateLesson, Lesson, LessonFilter, UpdateLesson};

use crate::error::AppResult;
use crate::middleware::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::response::DataResponse;
use crate::services::lessons;
use crate::state::AppState;

/// GET /api/v1/lessons
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<LessonFilter>,
) -> AppResult<Json<DataResponse<Vec<Lesson>>>> {
    let data = lessons::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/lessons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<Lesson>>> {
    let data = lessons::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/lessons
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateLesson>,
) -> AppResult<(StatusCode, Json<DataResponse<Lesson>>)> {
    let data = lessons::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PUT /api/v1/lessons/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateLesson>,
) -> AppResult<Json<DataResponse<Lesson>>> {
    let data = lessons::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/lessons/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    lessons::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

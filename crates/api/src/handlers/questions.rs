//! Handlers for the `/questions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pathway_core::types::DbId;
use pathway_db::models::question::{CreateQuestion, Question, QuestionFilter, UpdateQuestion};

use crate::error::AppResult;
use crate::middleware::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::response::DataResponse;
use crate::services::questions;
use crate::state::AppState;

/// GET /api/v1/questions
///
/// Filters: `?type=quiz|interview&difficulty=easy|medium|hard&topicId=`.
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<QuestionFilter>,
) -> AppResult<Json<DataResponse<Vec<Question>>>> {
    let data = questions::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<Question>>> {
    let data = questions::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/questions
///
/// Difficulty defaults to `medium` and type to `quiz`.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateQuestion>,
) -> AppResult<(StatusCode, Json<DataResponse<Question>>)> {
    let data = questions::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PUT /api/v1/questions/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateQuestion>,
) -> AppResult<Json<DataResponse<Question>>> {
    let data = questions::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    questions::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

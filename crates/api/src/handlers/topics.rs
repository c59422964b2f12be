//! Handlers for the `/topics` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pathway_core::types::DbId;
use pathway_db::models::topic::{CreateTopic, Topic, TopicDetail, TopicFilter, UpdateTopic};

use crate::error::AppResult;
use crate::middleware::validation::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::response::DataResponse;
use crate::services::topics;
use crate::state::AppState;

/// GET /api/v1/topics
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<TopicFilter>,
) -> AppResult<Json<DataResponse<Vec<Topic>>>> {
    let data = topics::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/topics/{id}
///
/// Includes the topic's lessons and questions.
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<Json<DataResponse<TopicDetail>>> {
    let data = topics::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/topics
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTopic>,
) -> AppResult<(StatusCode, Json<DataResponse<Topic>>)> {
    let data = topics::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PUT /api/v1/topics/{id}
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTopic>,
) -> AppResult<Json<DataResponse<Topic>>> {
    let data = topics::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/topics/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<DbId>,
) -> AppResult<StatusCode> {
    topics::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

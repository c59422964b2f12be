//! Handlers for the `/admin` resource.
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::State;
use axum::Json;
use pathway_core::types::DbId;
use pathway_db::models::stats::PlatformStats;
use pathway_db::models::user::{SetRole, User};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::middleware::validation::{ValidatedJson, ValidatedPath};
use crate::response::DataResponse;
use crate::services::admin;
use crate::state::AppState;

/// GET /api/v1/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<PlatformStats>>> {
    let data = admin::stats(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/admin/users/{id}/role
pub async fn set_role(
    State(state): State<AppState>,
    RequireAdmin(acting): RequireAdmin,
    ValidatedPath(id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<SetRole>,
) -> AppResult<Json<DataResponse<User>>> {
    let data = admin::set_role(&state.pool, acting.user_id, id, &input).await?;
    Ok(Json(DataResponse { data }))
}

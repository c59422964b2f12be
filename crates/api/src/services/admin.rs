//! Admin-only operations: platform totals and role changes.

use pathway_core::types::DbId;
use pathway_db::models::stats::PlatformStats;
use pathway_db::models::user::{SetRole, User};
use pathway_db::repositories::{StatsRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

pub async fn stats(pool: &PgPool) -> AppResult<PlatformStats> {
    Ok(StatsRepo::platform_totals(pool).await?)
}

/// Grant or revoke a role. `acting_admin` is recorded in the log only.
pub async fn set_role(
    pool: &PgPool,
    acting_admin: DbId,
    id: DbId,
    input: &SetRole,
) -> AppResult<User> {
    let user = UserRepo::set_role(pool, id, &input.role)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    tracing::info!(user_id = %id, role = %user.role, admin_id = %acting_admin, "User role changed");
    Ok(user)
}

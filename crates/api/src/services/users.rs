//! User accounts and credential checks.

use pathway_core::error::CoreError;
use pathway_core::roles::ROLE_USER;
use pathway_core::types::DbId;
use pathway_db::models::path::Path;
use pathway_db::models::user::{CreateUser, UpdateUser, User, UserDetail, UserWithCounts};
use pathway_db::repositories::{PathRepo, UserRepo};
use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn list(pool: &PgPool) -> AppResult<Vec<UserWithCounts>> {
    Ok(UserRepo::list_with_counts(pool).await?)
}

/// A user with their authored paths.
pub async fn get(pool: &PgPool, id: DbId) -> AppResult<UserDetail> {
    let user = UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    let paths = PathRepo::list_by_user(pool, id).await?;
    Ok(UserDetail { user, paths })
}

/// Create a user with the `user` role, hashing the password when one is
/// supplied.
///
/// A duplicate email surfaces as a `uq_users_email` violation (409).
pub async fn create(pool: &PgPool, input: &CreateUser) -> AppResult<User> {
    let password_hash = input
        .password
        .as_deref()
        .map(hash_password)
        .transpose()
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(pool, input, password_hash.as_deref(), ROLE_USER).await?;
    tracing::info!(user_id = %user.id, role = %user.role, "User created");
    Ok(user)
}

pub async fn update(pool: &PgPool, id: DbId, input: &UpdateUser) -> AppResult<User> {
    let user = UserRepo::update(pool, id, input)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    tracing::info!(user_id = %id, "User updated");
    Ok(user)
}

pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !UserRepo::exists(pool, id).await? {
        return Err(AppError::not_found("User", id));
    }
    UserRepo::delete(pool, id).await?;
    tracing::info!(user_id = %id, "User deleted");
    Ok(())
}

/// Paths authored by a user, newest first.
pub async fn list_paths(pool: &PgPool, user_id: DbId) -> AppResult<Vec<Path>> {
    if !UserRepo::exists(pool, user_id).await? {
        return Err(AppError::not_found("User", user_id));
    }
    Ok(PathRepo::list_by_user(pool, user_id).await?)
}

/// Check an email/password pair.
///
/// Unknown emails, accounts without a password, and wrong passwords all
/// produce the same 401 so callers cannot tell which emails exist.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> AppResult<User> {
    let unauthorized = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let user = UserRepo::find_by_email(pool, email)
        .await?
        .ok_or_else(unauthorized)?;
    let hash = user.password_hash.as_deref().ok_or_else(unauthorized)?;

    let valid = verify_password(password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !valid {
        tracing::warn!(user_id = %user.id, "Failed login attempt");
        return Err(unauthorized());
    }
    Ok(user)
}

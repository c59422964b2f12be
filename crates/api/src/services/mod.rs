//! Service layer.
//!
//! Services sit between handlers and repositories. They check that
//! referenced rows exist before writing, turn misses into
//! [`CoreError::NotFound`](pathway_core::error::CoreError::NotFound), apply
//! defaults, and own multi-statement units of work. The acting user, when an
//! operation needs one, is always passed in explicitly.

use pathway_core::validation::FieldError;

use crate::error::{AppError, AppResult};

pub mod admin;
pub mod discussions;
pub mod leaderboard;
pub mod lessons;
pub mod paths;
pub mod progress;
pub mod questions;
pub mod topics;
pub mod users;

/// Unwrap a field that request validation has already marked as required.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(vec![FieldError::new(field, "Required")]))
}

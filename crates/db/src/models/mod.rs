//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! JSON keys are camelCase; database columns are snake_case.

pub mod comment;
pub mod discussion;
pub mod leaderboard;
pub mod lesson;
pub mod path;
pub mod progress;
pub mod question;
pub mod stats;
pub mod topic;
pub mod user;

//! Domain types and pure rules for the learning-paths platform.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these types.

pub mod error;
pub mod leaderboard;
pub mod lesson;
pub mod path;
pub mod progress;
pub mod question;
pub mod roles;
pub mod types;
pub mod validation;

pub mod admin;
pub mod auth;
pub mod discussions;
pub mod leaderboard;
pub mod lessons;
pub mod paths;
pub mod progress;
pub mod questions;
pub mod topics;
pub mod users;

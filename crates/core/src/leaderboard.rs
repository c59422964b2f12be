//! Leaderboard ranking rules.
//!
//! The database returns standings already ordered (completed count
//! descending, email ascending); this module turns them into ranked,
//! scored entries.

use serde::Serialize;

use crate::types::DbId;

/// Points awarded for each completed item.
pub const POINTS_PER_COMPLETION: i64 = 10;

/// Maximum number of ranked users returned.
pub const LEADERBOARD_LIMIT: i64 = 50;

/// One user's raw standing as read from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub user_id: DbId,
    pub name: Option<String>,
    pub email: String,
    pub completed_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position in the ordered standings.
    pub rank: i64,
    pub user_id: DbId,
    pub name: Option<String>,
    pub username: String,
    pub completed_count: i64,
    pub points: i64,
}

/// Derive a display username from an email address (its local part).
pub fn username_from_email(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}

/// Assign ranks by position to already-ordered standings.
pub fn rank_standings(standings: impl IntoIterator<Item = Standing>) -> Vec<LeaderboardEntry> {
    standings
        .into_iter()
        .enumerate()
        .map(|(index, s)| LeaderboardEntry {
            rank: index as i64 + 1,
            user_id: s.user_id,
            username: username_from_email(&s.email).to_string(),
            name: s.name,
            completed_count: s.completed_count,
            points: s.completed_count * POINTS_PER_COMPLETION,
        })
        .collect()
}

/// Find a user's entry within a ranked list.
///
/// Usernames are not unique across email domains, so entries are matched by id.
pub fn find_for_user(entries: &[LeaderboardEntry], user_id: DbId) -> Option<&LeaderboardEntry> {
    entries.iter().find(|e| e.user_id == user_id)
}

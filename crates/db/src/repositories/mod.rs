//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Inserts that take part in
//! multi-table writes accept any `PgExecutor` so they can run inside a
//! caller-owned transaction.

pub mod comment_repo;
pub mod discussion_repo;
pub mod leaderboard_repo;
pub mod lesson_repo;
pub mod path_repo;
pub mod progress_repo;
pub mod question_repo;
pub mod stats_repo;
pub mod topic_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use discussion_repo::DiscussionRepo;
pub use leaderboard_repo::LeaderboardRepo;
pub use lesson_repo::LessonRepo;
pub use path_repo::PathRepo;
pub use progress_repo::ProgressRepo;
pub use question_repo::QuestionRepo;
pub use stats_repo::StatsRepo;
pub use topic_repo::TopicRepo;
pub use user_repo::UserRepo;

//! Fetch graphs: which associations a detail query loads.
//!
//! Repositories take one of these instead of hard-coding eager loading, so
//! the call site states exactly which nested rows come back.

/// Associations loaded alongside a topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicFetch {
    pub lessons: bool,
    pub questions: bool,
}

impl TopicFetch {
    pub const FULL: Self = Self {
        lessons: true,
        questions: true,
    };
}

/// Associations loaded alongside a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathFetch {
    pub author: bool,
    /// `None` skips topics entirely; `Some` loads them with the given graph.
    pub topics: Option<TopicFetch>,
}

impl PathFetch {
    pub const SHALLOW: Self = Self {
        author: false,
        topics: None,
    };
    /// Author plus every topic with its lessons and questions.
    pub const FULL: Self = Self {
        author: true,
        topics: Some(TopicFetch::FULL),
    };
}

/// Associations loaded alongside a discussion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscussionFetch {
    pub author: bool,
    pub comments: bool,
}

impl DiscussionFetch {
    pub const FULL: Self = Self {
        author: true,
        comments: true,
    };
}

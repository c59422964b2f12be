//! Progress targets and per-user completion statistics.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// The item a progress row is recorded against.
///
/// A progress row references exactly one lesson or exactly one question;
/// the database enforces the same rule with a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTarget {
    Lesson(DbId),
    Question(DbId),
}

impl ProgressTarget {
    /// Build a target from the two optional ids of an upsert request.
    pub fn from_ids(
        lesson_id: Option<DbId>,
        question_id: Option<DbId>,
    ) -> Result<Self, CoreError> {
        match (lesson_id, question_id) {
            (Some(id), None) => Ok(Self::Lesson(id)),
            (None, Some(id)) => Ok(Self::Question(id)),
            (None, None) => Err(CoreError::Validation(
                "Either lessonId or questionId is required".to_string(),
            )),
            (Some(_), Some(_)) => Err(CoreError::Validation(
                "Provide only one of lessonId or questionId".to_string(),
            )),
        }
    }

    pub fn id(&self) -> DbId {
        match self {
            Self::Lesson(id) | Self::Question(id) => *id,
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Lesson(_) => "Lesson",
            Self::Question(_) => "Question",
        }
    }

    pub fn lesson_id(&self) -> Option<DbId> {
        match self {
            Self::Lesson(id) => Some(*id),
            Self::Question(_) => None,
        }
    }

    pub fn question_id(&self) -> Option<DbId> {
        match self {
            Self::Question(id) => Some(*id),
            Self::Lesson(_) => None,
        }
    }
}

/// Aggregated progress for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total: i64,
    pub completed: i64,
    pub average_score: f64,
    /// Percentage in `0.0..=100.0`.
    pub completion_rate: f64,
}

impl ProgressStats {
    /// Combine the three aggregate query results into a stats payload.
    ///
    /// `average_score` is `None` when no completed row carries a score.
    pub fn from_counts(total: i64, completed: i64, average_score: Option<f64>) -> Self {
        Self {
            total,
            completed,
            average_score: average_score.unwrap_or(0.0),
            completion_rate: completion_rate(total, completed),
        }
    }
}

/// `completed / total * 100`, or 0 when there is nothing to complete.
pub fn completion_rate(total: i64, completed: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    #[test]
    fn target_requires_exactly_one_id() {
        let id = Uuid::new_v4();
        assert_eq!(
            ProgressTarget::from_ids(Some(id), None).unwrap(),
            ProgressTarget::Lesson(id)
        );
        assert_eq!(
            ProgressTarget::from_ids(None, Some(id)).unwrap(),
            ProgressTarget::Question(id)
        );
        assert_matches!(
            ProgressTarget::from_ids(None, None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            ProgressTarget::from_ids(Some(id), Some(Uuid::new_v4())),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn target_splits_into_columns() {
        let id = Uuid::new_v4();
        let target = ProgressTarget::Question(id);
        assert_eq!(target.lesson_id(), None);
        assert_eq!(target.question_id(), Some(id));
        assert_eq!(target.entity(), "Question");
    }

    #[test]
    fn zero_rows_give_zero_rate() {
        let stats = ProgressStats::from_counts(0, 0, None);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.average_score, 0.0);
    }

    #[test]
    fn three_of_four_completed() {
        let stats = ProgressStats::from_counts(4, 3, Some(90.0));
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.average_score, 90.0);
        assert_eq!(stats.completion_rate, 75.0);
    }
}

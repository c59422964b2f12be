//! Lesson kinds.

use std::str::FromStr;

use validator::ValidationError;

use crate::error::CoreError;
use crate::validation::invalid;

/// The format of a single learning unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonType {
    Video,
    Article,
    Exercise,
    Quiz,
}

const VALID_LESSON_TYPES: &[&str] = &["video", "article", "exercise", "quiz"];

impl LessonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Article => "article",
            Self::Exercise => "exercise",
            Self::Quiz => "quiz",
        }
    }
}

impl FromStr for LessonType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(Self::Video),
            "article" => Ok(Self::Article),
            "exercise" => Ok(Self::Exercise),
            "quiz" => Ok(Self::Quiz),
            _ => Err(CoreError::Validation(format!(
                "Invalid lesson type '{s}'. Must be one of: {}",
                VALID_LESSON_TYPES.join(", ")
            ))),
        }
    }
}

pub fn validate_lesson_type(value: &str) -> Result<(), ValidationError> {
    value.parse::<LessonType>().map(|_| ()).map_err(|_| {
        invalid(
            "lesson_type",
            format!("Type must be one of: {}", VALID_LESSON_TYPES.join(", ")),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_parses() {
        for name in VALID_LESSON_TYPES {
            let parsed: LessonType = name.parse().unwrap();
            assert_eq!(parsed.as_str(), *name);
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!("podcast".parse::<LessonType>().is_err());
        assert!(validate_lesson_type("podcast").is_err());
    }
}

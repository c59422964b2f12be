//! Question difficulty and kind.

use std::str::FromStr;

use validator::ValidationError;

use crate::error::CoreError;
use crate::validation::invalid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl QuestionDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for QuestionDifficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(CoreError::Validation(format!(
                "Invalid question difficulty '{s}'. Must be one of: easy, medium, hard"
            ))),
        }
    }
}

/// Whether a question is a short quiz prompt or an interview-style prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionKind {
    #[default]
    Quiz,
    Interview,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Interview => "interview",
        }
    }
}

impl FromStr for QuestionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(Self::Quiz),
            "interview" => Ok(Self::Interview),
            _ => Err(CoreError::Validation(format!(
                "Invalid question type '{s}'. Must be one of: quiz, interview"
            ))),
        }
    }
}

pub fn validate_question_difficulty(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<QuestionDifficulty>()
        .map(|_| ())
        .map_err(|_| invalid("difficulty", "Difficulty must be one of: easy, medium, hard"))
}

pub fn validate_question_kind(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<QuestionKind>()
        .map(|_| ())
        .map_err(|_| invalid("question_type", "Type must be one of: quiz, interview"))
}

//! Learning path constants and validation.

use std::fmt;
use std::str::FromStr;

use validator::ValidationError;

use crate::error::CoreError;
use crate::validation::invalid;

/// Category applied when a path is created without one.
pub const DEFAULT_CATEGORY: &str = "general";

/// How demanding a learning path is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathDifficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

const VALID_DIFFICULTIES: &[&str] = &["beginner", "intermediate", "advanced"];

impl PathDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for PathDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathDifficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(CoreError::Validation(format!(
                "Invalid difficulty '{s}'. Must be one of: {}",
                VALID_DIFFICULTIES.join(", ")
            ))),
        }
    }
}

/// `validator` hook for path difficulty fields.
pub fn validate_difficulty(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<PathDifficulty>()
        .map(|_| ())
        .map_err(|_| {
            invalid(
                "difficulty",
                format!("Difficulty must be one of: {}", VALID_DIFFICULTIES.join(", ")),
            )
        })
}

/// Resolve the stored difficulty for a new path, defaulting to beginner.
pub fn difficulty_or_default(value: Option<&str>) -> Result<PathDifficulty, CoreError> {
    value.map_or(Ok(PathDifficulty::default()), str::parse::<PathDifficulty>)
}

/// Resolve the stored category for a new path. Blank categories count as omitted.
pub fn category_or_default(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

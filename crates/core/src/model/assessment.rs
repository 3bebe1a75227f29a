use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("score must be within 0..=100, got {0}")]
    OutOfRange(u32),
}

/// Match percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Score(u8);

impl Score {
    pub const MAX: u32 = 100;

    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` for values above 100.
    pub fn new(value: u32) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::OutOfRange(value));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ScoreError::OutOfRange(value))
    }

    /// Score from a compile-time constant, capped at 100.
    #[must_use]
    pub const fn saturating(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Score {
    type Error = ScoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        u32::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scored career category with its recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    category: String,
    score: Score,
    recommendations: Vec<String>,
}

impl AssessmentResult {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        score: Score,
        recommendations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            category: category.into(),
            score,
            recommendations: recommendations.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }
}

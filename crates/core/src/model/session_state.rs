use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answers::AnswerMap;
use crate::model::question::{Question, QuestionBank};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("option {index} is out of range for a question with {option_count} options")]
    InvalidOptionIndex { index: usize, option_count: usize },

    #[error("assessment is already completed")]
    InvalidState,

    #[error("results can only be generated for a completed assessment")]
    Precondition,

    #[error("scoring produced no results")]
    NoResults,
}

/// Reasons a stored session cannot be restored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("session must cover at least one question")]
    NoQuestions,

    #[error("current index {current_index} exceeds {total} questions")]
    IndexOutOfRange { current_index: usize, total: usize },

    #[error("{answered} answers recorded but {current_index} questions passed")]
    AnswerCountMismatch { answered: usize, current_index: usize },
}

/// Position of a session in the quiz state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress(usize),
    Completed,
}

/// Effect of a successful answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { next_index: usize },
    Completed,
}

/// Progress through one assessment attempt.
///
/// `current_index` ranges over `[0, total]`; the session is completed exactly
/// when it equals `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionStateRaw")]
pub struct SessionState {
    total: usize,
    current_index: usize,
    answers: AnswerMap,
}

#[derive(Deserialize)]
struct SessionStateRaw {
    total: usize,
    current_index: usize,
    answers: AnswerMap,
}

impl TryFrom<SessionStateRaw> for SessionState {
    type Error = SessionStateError;

    fn try_from(raw: SessionStateRaw) -> Result<Self, Self::Error> {
        if raw.total == 0 {
            return Err(SessionStateError::NoQuestions);
        }
        if raw.current_index > raw.total {
            return Err(SessionStateError::IndexOutOfRange {
                current_index: raw.current_index,
                total: raw.total,
            });
        }
        if raw.answers.len() != raw.current_index {
            return Err(SessionStateError::AnswerCountMismatch {
                answered: raw.answers.len(),
                current_index: raw.current_index,
            });
        }
        Ok(Self {
            total: raw.total,
            current_index: raw.current_index,
            answers: raw.answers,
        })
    }
}

impl SessionState {
    #[must_use]
    pub fn new(bank: &QuestionBank) -> Self {
        Self {
            total: bank.len(),
            current_index: 0,
            answers: AnswerMap::new(),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.current_index == self.total
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_completed() {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress(self.current_index)
        }
    }

    /// The question awaiting an answer, if any.
    #[must_use]
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        if self.is_completed() {
            None
        } else {
            bank.get(self.current_index)
        }
    }

    /// `(current_index + 1) / total`, clamped to `1.0` once completed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        let position = (self.current_index + 1).min(self.total);
        position as f64 / self.total as f64
    }

    /// Record `option_index` for the current question and advance.
    ///
    /// State is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::InvalidState` if the session is completed and
    /// `AssessmentError::InvalidOptionIndex` if the index is out of range.
    pub fn answer(
        &mut self,
        bank: &QuestionBank,
        option_index: usize,
    ) -> Result<Transition, AssessmentError> {
        let question = self
            .current_question(bank)
            .ok_or(AssessmentError::InvalidState)?;
        if option_index >= question.option_count() {
            return Err(AssessmentError::InvalidOptionIndex {
                index: option_index,
                option_count: question.option_count(),
            });
        }

        self.answers.record(question.id().clone(), option_index);
        self.current_index += 1;

        if self.is_completed() {
            Ok(Transition::Completed)
        } else {
            Ok(Transition::Advanced {
                next_index: self.current_index,
            })
        }
    }

    /// Back to the first question with no answers.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.answers.clear();
    }
}

use std::fmt;
use std::sync::Arc;

use mentor_core::ResultGenerator;
use mentor_core::model::{
    AssessmentResult, Question, QuestionBank, SessionPhase, SessionState, Transition,
};

use super::snapshot::AssessmentSnapshot;
use crate::error::SessionError;

//
// ─── GENERATION TOKEN ──────────────────────────────────────────────────────────
//

/// Identifies one attempt of a session; bumped on every reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationToken(u64);

impl GenerationToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for GenerationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Work order for the delayed result generation of a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub token: GenerationToken,
    pub state: SessionState,
}

/// Results produced for a given attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResults {
    pub token: GenerationToken,
    pub results: Vec<AssessmentResult>,
}

/// Effect of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Advanced { next_index: usize },
    Completed(PendingGeneration),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One assessment attempt over a question bank.
///
/// Owns the `SessionState` and the generated results. State changes only
/// through `answer_current`, `reset` and `publish_results`.
#[derive(Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    state: SessionState,
    token: GenerationToken,
    results: Option<Vec<AssessmentResult>>,
}

impl AssessmentSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        let state = SessionState::new(&bank);
        Self {
            bank,
            state,
            token: GenerationToken::default(),
            results: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn token(&self) -> GenerationToken {
        self.token
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.state.current_question(&self.bank)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.state.total()
    }

    /// 1-based number of the question on screen; stays at the last one once completed.
    #[must_use]
    pub fn question_number(&self) -> usize {
        (self.state.current_index() + 1).min(self.state.total())
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.state.answers().len()
    }

    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.state.progress_fraction()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// Completed, but results have not been published yet.
    #[must_use]
    pub fn is_awaiting_results(&self) -> bool {
        self.is_completed() && self.results.is_none()
    }

    #[must_use]
    pub fn results(&self) -> Option<&[AssessmentResult]> {
        self.results.as_deref()
    }

    /// Record an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Assessment` for an out-of-range option or a
    /// completed session; the session is unchanged in both cases.
    pub fn answer_current(&mut self, option_index: usize) -> Result<AnswerOutcome, SessionError> {
        let transition = self.state.answer(&self.bank, option_index)?;
        tracing::debug!(
            token = %self.token,
            option_index,
            answered = self.answered_count(),
            "assessment answer recorded"
        );

        Ok(match transition {
            Transition::Advanced { next_index } => AnswerOutcome::Advanced { next_index },
            Transition::Completed => AnswerOutcome::Completed(PendingGeneration {
                token: self.token,
                state: self.state.clone(),
            }),
        })
    }

    /// Generate results synchronously.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Assessment` with `AssessmentError::Precondition`
    /// while the session is still in progress.
    pub fn generate(&self, generator: &ResultGenerator) -> Result<Vec<AssessmentResult>, SessionError> {
        Ok(generator.generate(&self.bank, &self.state)?)
    }

    /// Accept results produced for this attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StaleGeneration` for results of an earlier attempt
    /// and `SessionError::AlreadyPublished` if results are already present.
    pub fn publish_results(
        &mut self,
        generated: GeneratedResults,
    ) -> Result<&[AssessmentResult], SessionError> {
        if generated.token != self.token || !self.is_completed() {
            tracing::debug!(
                expected = %self.token,
                got = %generated.token,
                "discarding stale assessment results"
            );
            return Err(SessionError::StaleGeneration {
                expected: self.token,
                got: generated.token,
            });
        }
        if self.results.is_some() {
            return Err(SessionError::AlreadyPublished);
        }

        Ok(self.results.insert(generated.results).as_slice())
    }

    /// Start over from the first question, dropping answers and results.
    pub fn reset(&mut self) {
        self.state.reset();
        self.results = None;
        self.token = self.token.next();
        tracing::debug!(token = %self.token, "assessment reset");
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> AssessmentSnapshot {
        AssessmentSnapshot {
            current_question: self.current_question().cloned(),
            question_number: self.question_number(),
            total: self.total_questions(),
            progress_fraction: self.progress_fraction(),
            answered_count: self.answered_count(),
            completed: self.is_completed(),
            awaiting_results: self.is_awaiting_results(),
            results: self.results.clone(),
        }
    }
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("questions", &self.bank.len())
            .field("current_index", &self.state.current_index())
            .field("answered", &self.answered_count())
            .field("token", &self.token)
            .field("has_results", &self.results.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

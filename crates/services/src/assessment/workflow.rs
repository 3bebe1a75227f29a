use std::sync::Arc;

use mentor_core::model::{AppSettings, AssessmentResult, QuestionBank};
use mentor_core::{ResultGenerator, ScoringStrategy};

use super::service::{AnswerOutcome, AssessmentSession, GeneratedResults, PendingGeneration};
use crate::delay::Delay;
use crate::error::SessionError;

/// Orchestrates session start, answering and delayed result generation.
#[derive(Clone, Debug)]
pub struct AssessmentLoopService {
    bank: Arc<QuestionBank>,
    generator: ResultGenerator,
    result_delay: Delay,
}

impl AssessmentLoopService {
    /// Career question bank and fixed result table, delayed per `settings`.
    #[must_use]
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            bank: Arc::new(QuestionBank::career()),
            generator: ResultGenerator::default(),
            result_delay: Delay::new(settings.result_delay()),
        }
    }

    #[must_use]
    pub fn with_bank(mut self, bank: QuestionBank) -> Self {
        self.bank = Arc::new(bank);
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Arc<dyn ScoringStrategy>) -> Self {
        self.generator = ResultGenerator::new(strategy);
        self
    }

    #[must_use]
    pub fn result_delay(&self) -> Delay {
        self.result_delay
    }

    #[must_use]
    pub fn start_session(&self) -> AssessmentSession {
        tracing::debug!(questions = self.bank.len(), "starting assessment session");
        AssessmentSession::new(Arc::clone(&self.bank))
    }

    /// Answer the current question of `session`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for invalid options or a completed session.
    pub fn answer_current(
        &self,
        session: &mut AssessmentSession,
        option_index: usize,
    ) -> Result<AnswerOutcome, SessionError> {
        let outcome = session.answer_current(option_index).inspect_err(|err| {
            tracing::warn!(%err, option_index, "rejected assessment answer");
        })?;
        if let AnswerOutcome::Completed(pending) = &outcome {
            tracing::info!(token = %pending.token, "assessment completed, generating results");
        }
        Ok(outcome)
    }

    /// Generate results for `session` right away.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session is not completed.
    pub fn generate(&self, session: &AssessmentSession) -> Result<Vec<AssessmentResult>, SessionError> {
        session.generate(&self.generator)
    }

    /// Produce results for a completed attempt after the configured delay.
    ///
    /// The returned results carry the attempt's token; the session rejects them
    /// if it was reset in the meantime.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if scoring fails.
    pub async fn generate_results(
        &self,
        pending: PendingGeneration,
    ) -> Result<GeneratedResults, SessionError> {
        let generator = self.generator.clone();
        let bank = Arc::clone(&self.bank);
        let PendingGeneration { token, state } = pending;

        let results = self
            .result_delay
            .run(move || generator.generate(&bank, &state))
            .await?;
        Ok(GeneratedResults { token, results })
    }

    /// Answer every question with `picks` and return the published results.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` if `picks` does not cover every
    /// question, or the first answer/scoring error.
    pub async fn run_to_completion(
        &self,
        picks: &[usize],
    ) -> Result<Vec<AssessmentResult>, SessionError> {
        let mut session = self.start_session();
        let mut pending = None;
        for pick in picks {
            if let AnswerOutcome::Completed(done) = self.answer_current(&mut session, *pick)? {
                pending = Some(done);
            }
        }

        let Some(pending) = pending else {
            return Err(SessionError::Incomplete {
                answered: session.answered_count(),
                total: session.total_questions(),
            });
        };

        let generated = self.generate_results(pending).await?;
        Ok(session.publish_results(generated)?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::model::{AnswerMap, AssessmentError, Score};

    struct SingleCategory;

    impl ScoringStrategy for SingleCategory {
        fn score(&self, _bank: &QuestionBank, answers: &AnswerMap) -> Vec<AssessmentResult> {
            let total: usize = answers.iter().map(|(_, pick)| pick).sum();
            let score = Score::new(u32::try_from(total * 10).unwrap_or(100)).unwrap_or(Score::saturating(100));
            vec![AssessmentResult::new("Answer Sum", score, ["Keep going"])]
        }
    }

    #[tokio::test]
    async fn run_to_completion_publishes_fixed_table() {
        let service = AssessmentLoopService::new(&AppSettings::instant());
        let results = service.run_to_completion(&[0, 1, 2, 3, 0]).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].category(), "Technical Leadership");
    }

    #[tokio::test]
    async fn run_to_completion_reports_missing_answers() {
        let service = AssessmentLoopService::new(&AppSettings::instant());
        let err = service.run_to_completion(&[0, 1]).await.unwrap_err();
        assert_eq!(err, SessionError::Incomplete { answered: 2, total: 5 });
    }

    #[tokio::test]
    async fn run_to_completion_stops_on_invalid_option() {
        let service = AssessmentLoopService::new(&AppSettings::instant());
        let err = service.run_to_completion(&[0, 7, 1, 1, 1]).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Assessment(AssessmentError::InvalidOptionIndex { index: 7, .. })
        ));
    }

    #[tokio::test]
    async fn custom_strategy_is_used() {
        let service = AssessmentLoopService::new(&AppSettings::instant())
            .with_strategy(Arc::new(SingleCategory));
        let results = service.run_to_completion(&[1, 1, 1, 1, 1]).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score().value(), 50);
    }
}

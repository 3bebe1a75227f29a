use std::fmt;
use std::sync::Arc;

use crate::model::{AnswerMap, AssessmentError, AssessmentResult, QuestionBank, Score, SessionState};

//
// ─── STRATEGY ──────────────────────────────────────────────────────────────────
//

/// Maps a completed set of answers to scored career categories.
///
/// Implementations must return at least one result; `Score` already bounds
/// each value to `0..=100`.
pub trait ScoringStrategy: Send + Sync {
    fn score(&self, bank: &QuestionBank, answers: &AnswerMap) -> Vec<AssessmentResult>;
}

//
// ─── FIXED TABLE ───────────────────────────────────────────────────────────────
//

/// Answer-independent result table.
///
/// Every completed assessment gets the same three categories in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedResultTable {
    results: Vec<AssessmentResult>,
}

impl FixedResultTable {
    #[must_use]
    pub fn new(results: Vec<AssessmentResult>) -> Self {
        Self { results }
    }

    #[must_use]
    pub fn career() -> Self {
        Self::new(vec![
            AssessmentResult::new(
                "Technical Leadership",
                Score::saturating(85),
                [
                    "Consider pursuing a Tech Lead or Engineering Manager role",
                    "Develop skills in system architecture and team mentoring",
                    "Look into companies with strong engineering cultures",
                ],
            ),
            AssessmentResult::new(
                "Innovation & Strategy",
                Score::saturating(78),
                [
                    "Explore product management opportunities",
                    "Consider roles in technology consulting",
                    "Look into startup environments for rapid growth",
                ],
            ),
            AssessmentResult::new(
                "Continuous Learning",
                Score::saturating(92),
                [
                    "Pursue advanced certifications in your field",
                    "Consider roles with R&D components",
                    "Look for companies that invest in employee education",
                ],
            ),
        ])
    }
}

impl Default for FixedResultTable {
    fn default() -> Self {
        Self::career()
    }
}

impl ScoringStrategy for FixedResultTable {
    fn score(&self, _bank: &QuestionBank, _answers: &AnswerMap) -> Vec<AssessmentResult> {
        self.results.clone()
    }
}

//
// ─── GENERATOR ─────────────────────────────────────────────────────────────────
//

/// Runs a scoring strategy against a completed session.
#[derive(Clone)]
pub struct ResultGenerator {
    strategy: Arc<dyn ScoringStrategy>,
}

impl ResultGenerator {
    #[must_use]
    pub fn new(strategy: Arc<dyn ScoringStrategy>) -> Self {
        Self { strategy }
    }

    /// # Errors
    ///
    /// Returns `AssessmentError::Precondition` if the session is not completed
    /// and `AssessmentError::NoResults` if the strategy returns nothing.
    pub fn generate(
        &self,
        bank: &QuestionBank,
        state: &SessionState,
    ) -> Result<Vec<AssessmentResult>, AssessmentError> {
        if !state.is_completed() {
            return Err(AssessmentError::Precondition);
        }
        let results = self.strategy.score(bank, state.answers());
        if results.is_empty() {
            return Err(AssessmentError::NoResults);
        }
        Ok(results)
    }
}

impl Default for ResultGenerator {
    fn default() -> Self {
        Self::new(Arc::new(FixedResultTable::career()))
    }
}

impl fmt::Debug for ResultGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultGenerator").finish_non_exhaustive()
    }
}

/// Copy of `results` ordered by descending score; ties keep their order.
#[must_use]
pub fn rank_by_score(results: &[AssessmentResult]) -> Vec<AssessmentResult> {
    let mut ranked = results.to_vec();
    ranked.sort_by(|left, right| right.score().cmp(&left.score()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyStrategy;

    impl ScoringStrategy for EmptyStrategy {
        fn score(&self, _bank: &QuestionBank, _answers: &AnswerMap) -> Vec<AssessmentResult> {
            Vec::new()
        }
    }

    fn completed(bank: &QuestionBank, picks: &[usize]) -> SessionState {
        let mut state = SessionState::new(bank);
        for pick in picks {
            state.answer(bank, *pick).unwrap();
        }
        state
    }

    #[test]
    fn generate_requires_completed_session() {
        let bank = QuestionBank::career();
        let state = completed(&bank, &[0, 1]);
        let err = ResultGenerator::default().generate(&bank, &state).unwrap_err();
        assert_eq!(err, AssessmentError::Precondition);
    }

    #[test]
    fn fixed_table_returns_three_results_in_table_order() {
        let bank = QuestionBank::career();
        let state = completed(&bank, &[0, 1, 2, 3, 0]);
        let results = ResultGenerator::default().generate(&bank, &state).unwrap();

        let categories: Vec<_> = results.iter().map(AssessmentResult::category).collect();
        assert_eq!(
            categories,
            vec!["Technical Leadership", "Innovation & Strategy", "Continuous Learning"]
        );
        assert!(results.iter().all(|r| r.score().value() <= 100));
        assert!(results.iter().all(|r| r.recommendations().len() == 3));
    }

    #[test]
    fn fixed_table_ignores_answers() {
        let bank = QuestionBank::career();
        let generator = ResultGenerator::default();
        let first = generator.generate(&bank, &completed(&bank, &[0, 0, 0, 0, 0])).unwrap();
        let second = generator.generate(&bank, &completed(&bank, &[3, 2, 1, 0, 3])).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_strategy_is_reported() {
        let bank = QuestionBank::career();
        let state = completed(&bank, &[0, 0, 0, 0, 0]);
        let generator = ResultGenerator::new(Arc::new(EmptyStrategy));
        assert_eq!(generator.generate(&bank, &state), Err(AssessmentError::NoResults));
    }

    #[test]
    fn rank_by_score_orders_descending() {
        let ranked = rank_by_score(&FixedResultTable::career().results);
        let scores: Vec<_> = ranked.iter().map(|r| r.score().value()).collect();
        assert_eq!(scores, vec![92, 85, 78]);
    }
}

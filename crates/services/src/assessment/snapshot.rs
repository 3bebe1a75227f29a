use mentor_core::model::{AssessmentResult, Question};

/// Read-only view of an assessment session, useful for UI.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSnapshot {
    pub current_question: Option<Question>,
    pub question_number: usize,
    pub total: usize,
    pub progress_fraction: f64,
    pub answered_count: usize,
    pub completed: bool,
    pub awaiting_results: bool,
    pub results: Option<Vec<AssessmentResult>>,
}

impl AssessmentSnapshot {
    /// Progress as a whole percentage, e.g. `20` for the first of five questions.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

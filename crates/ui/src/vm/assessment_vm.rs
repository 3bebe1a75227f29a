use mentor_core::model::AssessmentResult;
use services::{
    AnswerOutcome, AssessmentLoopService, AssessmentSession, GeneratedResults, PendingGeneration,
    SessionError,
};

use crate::views::{ViewError, ViewState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    Select(usize),
    Retake,
    DetailedPlan,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentOutcome {
    Continue,
    Generate(PendingGeneration),
}

/// Current question, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub options: Vec<String>,
    pub position_label: String,
    pub progress_percent: u8,
    pub category_label: String,
    pub answered_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCardVm {
    pub category: String,
    pub score: u8,
    pub match_label: String,
    pub recommendations: Vec<String>,
}

impl ResultCardVm {
    fn from_result(result: &AssessmentResult) -> Self {
        let score = result.score().value();
        Self {
            category: result.category().to_string(),
            score,
            match_label: format!("{score}% Match"),
            recommendations: result.recommendations().to_vec(),
        }
    }

    /// Inline width for the score bar.
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.score)
    }
}

pub struct AssessmentVm {
    session: AssessmentSession,
    generation_error: Option<ViewError>,
}

impl AssessmentVm {
    #[must_use]
    pub fn new(session: AssessmentSession) -> Self {
        Self {
            session,
            generation_error: None,
        }
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        let snapshot = self.session.snapshot();
        let question = snapshot.current_question.as_ref()?;
        Some(QuestionVm {
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
            position_label: format!("Question {} of {}", snapshot.question_number, snapshot.total),
            progress_percent: snapshot.progress_percent(),
            category_label: format!("Category: {}", question.category().label()),
            answered_label: format!("{} answered", snapshot.answered_count),
        })
    }

    /// Results panel state: idle while answering, loading while scoring.
    #[must_use]
    pub fn results_state(&self) -> ViewState<Vec<ResultCardVm>> {
        if let Some(err) = self.generation_error {
            return ViewState::Error(err);
        }
        match self.session.results() {
            Some(results) => {
                ViewState::Ready(results.iter().map(ResultCardVm::from_result).collect())
            }
            None if self.session.is_awaiting_results() => ViewState::Loading,
            None => ViewState::Idle,
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidChoice` for an option the question does not
    /// have and `ViewError::Unknown` for other failures.
    pub fn select(
        &mut self,
        assessment_loop: &AssessmentLoopService,
        option_index: usize,
    ) -> Result<AssessmentOutcome, ViewError> {
        let outcome = assessment_loop
            .answer_current(&mut self.session, option_index)
            .map_err(|err| ViewError::from(&err))?;

        Ok(match outcome {
            AnswerOutcome::Advanced { .. } => AssessmentOutcome::Continue,
            AnswerOutcome::Completed(pending) => AssessmentOutcome::Generate(pending),
        })
    }

    /// Accept freshly generated results; returns `false` when they belong to
    /// an attempt that was retaken in the meantime.
    pub fn publish(&mut self, generated: GeneratedResults) -> bool {
        match self.session.publish_results(generated) {
            Ok(_) => true,
            Err(SessionError::StaleGeneration { .. }) => false,
            Err(err) => {
                tracing::warn!(%err, "failed to publish assessment results");
                self.generation_error = Some(ViewError::from(&err));
                false
            }
        }
    }

    pub fn record_generation_failure(&mut self, err: &SessionError) {
        self.generation_error = Some(ViewError::from(err));
    }

    pub fn retake(&mut self) {
        self.session.reset();
        self.generation_error = None;
    }
}

#[must_use]
pub fn start_assessment(assessment_loop: &AssessmentLoopService) -> AssessmentVm {
    AssessmentVm::new(assessment_loop.start_session())
}

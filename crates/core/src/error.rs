use thiserror::Error;

use crate::model::{
    AppSettingsError, AssessmentError, QuestionBankError, QuestionError, ScoreError,
    SessionStateError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    QuestionBank(#[from] QuestionBankError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    SessionState(#[from] SessionStateError),
    #[error(transparent)]
    Settings(#[from] AppSettingsError),
}

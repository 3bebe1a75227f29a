//! Shared error types for the services crate.

use thiserror::Error;

use mentor_core::model::{AssessmentError, MessageId};

use crate::assessment::GenerationToken;

/// Errors emitted by assessment session services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error("results from generation {got} arrived after the session moved to {expected}")]
    StaleGeneration {
        expected: GenerationToken,
        got: GenerationToken,
    },
    #[error("results were already published for this attempt")]
    AlreadyPublished,
    #[error("assessment incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}

/// Errors emitted by the canned chat.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("the mentor is still typing a reply")]
    ReplyPending,
    #[error("no reply is awaited for message {0}")]
    UnexpectedReply(MessageId),
}

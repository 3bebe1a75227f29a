use services::{ChatError, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    InvalidChoice,
    EmptyMessage,
    ReplyPending,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::InvalidChoice => "That answer is not available for this question.",
            ViewError::EmptyMessage => "Type a message first.",
            ViewError::ReplyPending => "Hold on, the mentor is still replying.",
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::Assessment(mentor_core::model::AssessmentError::InvalidOptionIndex {
                ..
            }) => ViewError::InvalidChoice,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&ChatError> for ViewError {
    fn from(err: &ChatError) -> Self {
        match err {
            ChatError::EmptyMessage => ViewError::EmptyMessage,
            ChatError::ReplyPending => ViewError::ReplyPending,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

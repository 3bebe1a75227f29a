#![forbid(unsafe_code)]

pub mod assessment;
pub mod chat;
pub mod delay;
pub mod error;

pub use mentor_core::Clock;

pub use error::{ChatError, SessionError};

pub use assessment::{
    AnswerOutcome, AssessmentLoopService, AssessmentSession, AssessmentSnapshot, GeneratedResults,
    GenerationToken, PendingGeneration,
};
pub use chat::{BotReply, ChatService, ChatThread, PendingReply};
pub use delay::Delay;

mod service;
mod snapshot;
mod workflow;

// Public API of the assessment subsystem.
pub use crate::error::SessionError;
pub use service::{
    AnswerOutcome, AssessmentSession, GeneratedResults, GenerationToken, PendingGeneration,
};
pub use snapshot::AssessmentSnapshot;
pub use workflow::AssessmentLoopService;

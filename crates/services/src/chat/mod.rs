mod service;
mod thread;

pub use crate::error::ChatError;
pub use service::ChatService;
pub use thread::{BotReply, ChatThread, PendingReply};

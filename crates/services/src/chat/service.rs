use mentor_core::Clock;
use mentor_core::model::{AppSettings, ChatMessage, ReplyBook};

use super::thread::{BotReply, ChatThread, PendingReply};
use crate::delay::Delay;
use crate::error::ChatError;

/// Canned mentor chat: looks replies up in a `ReplyBook` after a short pause.
#[derive(Clone, Debug)]
pub struct ChatService {
    clock: Clock,
    replies: ReplyBook,
    reply_delay: Delay,
}

impl ChatService {
    #[must_use]
    pub fn new(clock: Clock, settings: &AppSettings) -> Self {
        Self {
            clock,
            replies: ReplyBook::career(),
            reply_delay: Delay::new(settings.reply_delay()),
        }
    }

    #[must_use]
    pub fn with_replies(mut self, replies: ReplyBook) -> Self {
        self.replies = replies;
        self
    }

    #[must_use]
    pub fn start_thread(&self) -> ChatThread {
        ChatThread::new(self.clock.now())
    }

    /// Reply text for `input` without any delay.
    #[must_use]
    pub fn reply_for(&self, input: &str) -> &str {
        self.replies.reply_for(input)
    }

    /// Post a user message to `thread`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError` for blank input or while a reply is pending.
    pub fn submit(&self, thread: &mut ChatThread, input: &str) -> Result<PendingReply, ChatError> {
        let pending = thread.push_user(input, self.clock.now())?;
        tracing::debug!(message_id = %pending.message_id, "chat message submitted");
        Ok(pending)
    }

    /// Resolve the canned reply after the configured delay.
    pub async fn compose_reply(&self, pending: PendingReply) -> BotReply {
        let replies = self.replies.clone();
        self.reply_delay
            .run(move || {
                let content = replies.reply_for(&pending.input).to_string();
                BotReply {
                    in_reply_to: pending.message_id,
                    content,
                }
            })
            .await
    }

    /// Append `reply` to `thread`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::UnexpectedReply` if the thread is not waiting for it.
    pub fn deliver<'a>(
        &self,
        thread: &'a mut ChatThread,
        reply: BotReply,
    ) -> Result<&'a ChatMessage, ChatError> {
        thread.push_reply(reply, self.clock.now())
    }
}

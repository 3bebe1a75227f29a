use chrono::{DateTime, Utc};
use mentor_core::model::{ChatMessage, GREETING, MessageId, Sender};

use crate::error::ChatError;

/// A user message waiting for the mentor's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub message_id: MessageId,
    pub input: String,
}

/// The mentor's reply to a specific user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    pub in_reply_to: MessageId,
    pub content: String,
}

/// Ordered conversation between the user and the mentor.
///
/// Starts with the mentor greeting. At most one user message awaits a reply
/// at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
    awaiting: Option<MessageId>,
}

impl ChatThread {
    #[must_use]
    pub fn new(greeted_at: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Bot, GREETING, greeted_at)],
            awaiting: None,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The mentor is "typing" while a reply is outstanding.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Quick suggestions are offered until the first user message.
    #[must_use]
    pub fn shows_suggestions(&self) -> bool {
        self.messages.len() == 1
    }

    /// Append a user message.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyMessage` for blank input and
    /// `ChatError::ReplyPending` while the previous message is unanswered.
    pub fn push_user(
        &mut self,
        input: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<PendingReply, ChatError> {
        let content = input.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.awaiting.is_some() {
            return Err(ChatError::ReplyPending);
        }

        let message = ChatMessage::new(Sender::User, content, sent_at);
        let message_id = message.id();
        self.messages.push(message);
        self.awaiting = Some(message_id);

        Ok(PendingReply {
            message_id,
            input: content.to_string(),
        })
    }

    /// Append the mentor's reply and stop typing.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::UnexpectedReply` if `reply` does not answer the
    /// outstanding message.
    pub fn push_reply(
        &mut self,
        reply: BotReply,
        sent_at: DateTime<Utc>,
    ) -> Result<&ChatMessage, ChatError> {
        if self.awaiting != Some(reply.in_reply_to) {
            return Err(ChatError::UnexpectedReply(reply.in_reply_to));
        }
        self.awaiting = None;
        self.messages
            .push(ChatMessage::new(Sender::Bot, reply.content, sent_at));
        self.messages
            .last()
            .ok_or(ChatError::UnexpectedReply(reply.in_reply_to))
    }
}

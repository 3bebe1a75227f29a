use mentor_core::model::{Sender, SuggestionKind};
use services::{BotReply, ChatService, ChatThread, PendingReply};

use crate::views::ViewError;
use crate::vm::time_fmt::format_message_time;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatIntent {
    Send(String),
    Suggest(SuggestionKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBubbleVm {
    pub key: String,
    pub from_user: bool,
    pub content: String,
    pub time_label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestionVm {
    pub kind: SuggestionKind,
    pub text: &'static str,
}

pub struct ChatVm {
    thread: ChatThread,
}

impl ChatVm {
    #[must_use]
    pub fn new(thread: ChatThread) -> Self {
        Self { thread }
    }

    #[must_use]
    pub fn bubbles(&self) -> Vec<MessageBubbleVm> {
        self.thread
            .messages()
            .iter()
            .map(|message| MessageBubbleVm {
                key: message.id().to_string(),
                from_user: message.sender() == Sender::User,
                content: message.content().to_string(),
                time_label: format_message_time(message.sent_at()),
            })
            .collect()
    }

    #[must_use]
    pub fn suggestions(&self) -> Vec<SuggestionVm> {
        if !self.thread.shows_suggestions() {
            return Vec::new();
        }
        SuggestionKind::ALL
            .iter()
            .map(|kind| SuggestionVm {
                kind: *kind,
                text: kind.text(),
            })
            .collect()
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.thread.is_typing()
    }

    /// Send is disabled for blank drafts and while the mentor is typing.
    #[must_use]
    pub fn can_send(&self, draft: &str) -> bool {
        !draft.trim().is_empty() && !self.thread.is_typing()
    }

    /// # Errors
    ///
    /// Returns `ViewError::EmptyMessage` or `ViewError::ReplyPending`.
    pub fn submit(&mut self, chat: &ChatService, input: &str) -> Result<PendingReply, ViewError> {
        chat.submit(&mut self.thread, input)
            .map_err(|err| ViewError::from(&err))
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the reply does not match the pending message.
    pub fn deliver(&mut self, chat: &ChatService, reply: BotReply) -> Result<(), ViewError> {
        chat.deliver(&mut self.thread, reply)
            .map(|_| ())
            .map_err(|err| ViewError::from(&err))
    }
}

#[must_use]
pub fn start_chat(chat: &ChatService) -> ChatVm {
    ChatVm::new(chat.start_thread())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::model::{AppSettings, GREETING};
    use mentor_core::time::fixed_clock;

    fn service() -> ChatService {
        ChatService::new(fixed_clock(), &AppSettings::instant())
    }

    #[test]
    fn fresh_chat_offers_four_suggestions() {
        let chat = service();
        let vm = start_chat(&chat);
        let bubbles = vm.bubbles();

        assert_eq!(bubbles.len(), 1);
        assert!(!bubbles[0].from_user);
        assert_eq!(bubbles[0].content, GREETING);
        assert_eq!(bubbles[0].time_label, "22:13");
        assert_eq!(vm.suggestions().len(), 4);
    }

    #[tokio::test]
    async fn sending_hides_suggestions_and_blocks_until_reply() {
        let chat = service();
        let mut vm = start_chat(&chat);

        let pending = vm.submit(&chat, "Review my resume and skills").unwrap();
        assert!(vm.suggestions().is_empty());
        assert!(!vm.can_send("one more"));
        assert_eq!(vm.submit(&chat, "one more"), Err(ViewError::ReplyPending));

        let reply = chat.compose_reply(pending).await;
        vm.deliver(&chat, reply).unwrap();
        assert!(vm.can_send("one more"));
        assert!(vm.bubbles()[2].content.starts_with("Great! I can provide"));
    }

    #[test]
    fn blank_draft_cannot_be_sent() {
        let chat = service();
        let mut vm = start_chat(&chat);
        assert!(!vm.can_send("  "));
        assert_eq!(vm.submit(&chat, "  "), Err(ViewError::EmptyMessage));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::MessageId;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    sender: Sender,
    content: String,
    sent_at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn new(sender: Sender, content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::random(),
            sender,
            content: content.into(),
            sent_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}

/// Trigger keys for canned mentor replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    CareerPath,
    ResumeReview,
    GoalSetting,
    Learning,
}

impl SuggestionKind {
    pub const ALL: [SuggestionKind; 4] = [
        SuggestionKind::CareerPath,
        SuggestionKind::ResumeReview,
        SuggestionKind::GoalSetting,
        SuggestionKind::Learning,
    ];

    /// Text of the quick-suggestion button; also the trigger phrase.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            SuggestionKind::CareerPath => "Help me find my ideal career path",
            SuggestionKind::ResumeReview => "Review my resume and skills",
            SuggestionKind::GoalSetting => "Set professional goals for 2024",
            SuggestionKind::Learning => "Recommend learning resources",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            SuggestionKind::CareerPath => "career-path",
            SuggestionKind::ResumeReview => "resume-review",
            SuggestionKind::GoalSetting => "goal-setting",
            SuggestionKind::Learning => "learning",
        }
    }
}

pub const GREETING: &str = "Hello! I'm your AI Career Mentor. I'm here to help you navigate your professional journey, explore career paths, and achieve your goals. How can I assist you today?";

/// Finite trigger → reply table with a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyBook {
    entries: Vec<(SuggestionKind, String)>,
    default_reply: String,
}

impl ReplyBook {
    #[must_use]
    pub fn new(entries: Vec<(SuggestionKind, String)>, default_reply: impl Into<String>) -> Self {
        Self {
            entries,
            default_reply: default_reply.into(),
        }
    }

    #[must_use]
    pub fn career() -> Self {
        Self::new(
            vec![
                (
                    SuggestionKind::CareerPath,
                    "I'd be happy to help you explore career paths! Let me analyze your interests, skills, and market trends. Can you tell me about your current field, what you enjoy most about your work, and any areas where you'd like to grow?".to_string(),
                ),
                (
                    SuggestionKind::ResumeReview,
                    "Great! I can provide comprehensive resume feedback. Please share your current resume or tell me about your work experience, skills, and the type of positions you're targeting. I'll help optimize it for ATS systems and hiring managers.".to_string(),
                ),
                (
                    SuggestionKind::GoalSetting,
                    "Excellent timing for goal setting! Let's create SMART professional goals for 2024. What are your current priorities: skill development, career advancement, industry transition, or leadership growth? I'll help you create actionable milestones.".to_string(),
                ),
                (
                    SuggestionKind::Learning,
                    "I'd love to recommend personalized learning resources! What specific skills or knowledge areas interest you? I can suggest courses, certifications, books, and practical projects based on your career goals and learning style.".to_string(),
                ),
            ],
            "That's a great question! Based on current industry trends and career development best practices, I can provide you with personalized guidance. Could you share more details about your specific situation or goals?",
        )
    }

    /// First suggestion whose trigger phrase appears in `input`, ignoring case.
    ///
    /// Case-insensitive on both sides on purpose: a clicked suggestion sends
    /// its mixed-case text verbatim and must still hit its canned reply.
    #[must_use]
    pub fn match_trigger(&self, input: &str) -> Option<SuggestionKind> {
        let haystack = input.to_lowercase();
        self.entries
            .iter()
            .map(|(kind, _)| *kind)
            .find(|kind| haystack.contains(&kind.text().to_lowercase()))
    }

    /// Reply for `input`, falling back to the default reply.
    #[must_use]
    pub fn reply_for(&self, input: &str) -> &str {
        self.match_trigger(input)
            .and_then(|kind| {
                self.entries
                    .iter()
                    .find(|(candidate, _)| *candidate == kind)
                    .map(|(_, reply)| reply.as_str())
            })
            .unwrap_or(self.default_reply.as_str())
    }

    #[must_use]
    pub fn default_reply(&self) -> &str {
        &self.default_reply
    }
}

impl Default for ReplyBook {
    fn default() -> Self {
        Self::career()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_text_selects_its_reply() {
        let book = ReplyBook::career();
        for kind in SuggestionKind::ALL {
            assert_eq!(book.match_trigger(kind.text()), Some(kind));
            assert_ne!(book.reply_for(kind.text()), book.default_reply());
        }
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let book = ReplyBook::career();
        let input = "hey, can you REVIEW MY RESUME AND SKILLS please?";
        assert_eq!(book.match_trigger(input), Some(SuggestionKind::ResumeReview));
    }

    #[test]
    fn unmatched_input_gets_default_reply() {
        let book = ReplyBook::career();
        assert_eq!(book.reply_for("What should I wear to an interview?"), book.default_reply());
        assert_eq!(book.reply_for(""), book.default_reply());
    }
}

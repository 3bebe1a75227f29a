mod assessment_vm;
mod chat_vm;
mod notice_vm;
mod showcase_vm;
mod time_fmt;

pub use assessment_vm::{
    AssessmentIntent, AssessmentOutcome, AssessmentVm, QuestionVm, ResultCardVm, start_assessment,
};
pub use chat_vm::{ChatIntent, ChatVm, MessageBubbleVm, SuggestionVm, start_chat};
pub use notice_vm::{MAX_VISIBLE_NOTICES, NoticeEntry, NoticeStack};
pub use showcase_vm::{FeatureCardVm, StatCardVm, map_feature_cards, map_stat_cards};
pub use time_fmt::format_message_time;

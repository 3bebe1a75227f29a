mod answers;
mod app_settings;
mod assessment;
pub mod chat;
mod ids;
pub mod notice;
mod question;
mod session_state;
pub mod showcase;

pub use answers::AnswerMap;
pub use app_settings::{AppSettings, AppSettingsDraft, AppSettingsError};
pub use assessment::{AssessmentResult, Score, ScoreError};
pub use chat::{ChatMessage, GREETING, ReplyBook, Sender, SuggestionKind};
pub use ids::{MessageId, QuestionId};
pub use notice::Notice;
pub use question::{Question, QuestionBank, QuestionBankError, QuestionCategory, QuestionError};
pub use session_state::{AssessmentError, SessionPhase, SessionState, SessionStateError, Transition};
pub use showcase::{Feature, FeatureAction, FeatureStatus, Stat, Tab, Trend};

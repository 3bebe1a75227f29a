mod assessment;
mod chat;
mod home;
mod notices;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::{AssessmentPanel, AssessmentView};
pub use chat::{ChatPanel, ChatView};
pub use home::HomeView;
pub use notices::{NoticeTray, Notices, use_notice_provider, use_notices};
pub use state::{ViewError, ViewState};

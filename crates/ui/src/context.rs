use std::sync::Arc;

use mentor_core::model::AppSettings;
use services::{AssessmentLoopService, ChatService};

pub trait UiApp: Send + Sync {
    fn settings(&self) -> AppSettings;

    fn assessment_loop(&self) -> Arc<AssessmentLoopService>;
    fn chat_service(&self) -> Arc<ChatService>;
}

#[derive(Clone)]
pub struct AppContext {
    settings: AppSettings,

    assessment_loop: Arc<AssessmentLoopService>,
    chat_service: Arc<ChatService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            assessment_loop: app.assessment_loop(),
            chat_service: app.chat_service(),
        }
    }

    /// Delays the services were built with. Useful for diagnostics.
    #[must_use]
    pub fn settings(&self) -> AppSettings {
        self.settings
    }

    #[must_use]
    pub fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }

    #[must_use]
    pub fn chat_service(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

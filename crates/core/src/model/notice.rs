use serde::{Deserialize, Serialize};

/// Short transient message surfaced to the user (a toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    title: String,
    description: String,
}

impl Notice {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn assessment_complete() -> Self {
        Self::new(
            "Assessment Complete!",
            "Your personalized career insights are ready.",
        )
    }

    #[must_use]
    pub fn detailed_plan_coming_soon() -> Self {
        Self::new(
            "Feature coming soon!",
            "Detailed career plan generation will be available soon.",
        )
    }

    #[must_use]
    pub fn message_sent() -> Self {
        Self::new(
            "Message sent",
            "I'm analyzing your request and preparing a personalized response.",
        )
    }

    #[must_use]
    pub fn feature_coming_soon(feature: &str) -> Self {
        Self::new(
            "Coming Soon!",
            format!("{feature} will be available in the next update."),
        )
    }

    #[must_use]
    pub fn beta_feature(feature: &str) -> Self {
        Self::new(
            "Beta Feature",
            format!("{feature} is in beta. Your feedback is valuable!"),
        )
    }

    #[must_use]
    pub fn pro_coming_soon() -> Self {
        Self::new("Coming Soon!", "Pro features will be available soon.")
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

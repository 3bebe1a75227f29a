//! Static landing-page content: headline stats and product feature cards.

use serde::{Deserialize, Serialize};

use crate::model::notice::Notice;

/// Month-over-month change shown under a stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trend {
    pub value: &'static str,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: Option<Trend>,
    pub description: Option<&'static str>,
}

#[must_use]
pub fn stats() -> [Stat; 4] {
    [
        Stat {
            title: "Career Paths Analyzed",
            value: "15.2K+",
            trend: Some(Trend {
                value: "12%",
                is_positive: true,
            }),
            description: Some("Across 200+ industries"),
        },
        Stat {
            title: "Active Users",
            value: "8.5K",
            trend: Some(Trend {
                value: "24%",
                is_positive: true,
            }),
            description: Some("Growing community"),
        },
        Stat {
            title: "Success Rate",
            value: "89%",
            trend: Some(Trend {
                value: "5%",
                is_positive: true,
            }),
            description: Some("Career advancement"),
        },
        Stat {
            title: "Avg. Response Time",
            value: "< 2s",
            trend: None,
            description: Some("Lightning fast AI"),
        },
    ]
}

/// Which interactive panel is in front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Chat,
    Assessment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureStatus {
    Available,
    Beta,
    ComingSoon,
}

impl FeatureStatus {
    #[must_use]
    pub fn badge(self) -> Option<&'static str> {
        match self {
            FeatureStatus::Available => None,
            FeatureStatus::Beta => Some("BETA"),
            FeatureStatus::ComingSoon => Some("SOON"),
        }
    }

    #[must_use]
    pub fn cta_label(self) -> &'static str {
        match self {
            FeatureStatus::Available => "Get Started",
            FeatureStatus::Beta => "Try Beta",
            FeatureStatus::ComingSoon => "Coming Soon",
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        !matches!(self, FeatureStatus::ComingSoon)
    }
}

/// What clicking a feature card does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureAction {
    Open(Tab),
    Notify(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: [&'static str; 4],
    pub status: FeatureStatus,
}

impl Feature {
    #[must_use]
    pub fn action(&self) -> FeatureAction {
        match self.status {
            FeatureStatus::ComingSoon => FeatureAction::Notify(Notice::feature_coming_soon(self.title)),
            FeatureStatus::Beta => FeatureAction::Notify(Notice::beta_feature(self.title)),
            FeatureStatus::Available => {
                if self.title.to_lowercase().contains("chat") {
                    FeatureAction::Open(Tab::Chat)
                } else {
                    FeatureAction::Open(Tab::Assessment)
                }
            }
        }
    }
}

#[must_use]
pub fn features() -> [Feature; 4] {
    [
        Feature {
            title: "AI Career Chat",
            description: "Get personalized career advice through intelligent conversations",
            bullets: [
                "Real-time career guidance",
                "Industry insights and trends",
                "Personalized recommendations",
                "24/7 availability",
            ],
            status: FeatureStatus::Available,
        },
        Feature {
            title: "Skill Assessment",
            description: "Discover your strengths and areas for growth",
            bullets: [
                "Comprehensive skill analysis",
                "Industry benchmarking",
                "Learning path recommendations",
                "Progress tracking",
            ],
            status: FeatureStatus::Available,
        },
        Feature {
            title: "Resume Optimizer",
            description: "AI-powered resume review and optimization",
            bullets: [
                "ATS compatibility check",
                "Content optimization",
                "Industry-specific formatting",
                "Keyword analysis",
            ],
            status: FeatureStatus::Beta,
        },
        Feature {
            title: "Career Roadmap",
            description: "Personalized career path planning and milestones",
            bullets: [
                "Custom career paths",
                "Goal setting and tracking",
                "Timeline planning",
                "Success metrics",
            ],
            status: FeatureStatus::ComingSoon,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_features_open_matching_tab() {
        let [chat, assessment, beta, soon] = features();
        assert_eq!(chat.action(), FeatureAction::Open(Tab::Chat));
        assert_eq!(assessment.action(), FeatureAction::Open(Tab::Assessment));

        let FeatureAction::Notify(notice) = beta.action() else {
            panic!("beta feature should notify");
        };
        assert_eq!(notice.title(), "Beta Feature");
        assert!(notice.description().contains("Resume Optimizer"));

        let FeatureAction::Notify(notice) = soon.action() else {
            panic!("coming-soon feature should notify");
        };
        assert_eq!(notice.title(), "Coming Soon!");
        assert!(!soon.status.is_enabled());
    }

    #[test]
    fn status_labels() {
        assert_eq!(FeatureStatus::Available.badge(), None);
        assert_eq!(FeatureStatus::Beta.badge(), Some("BETA"));
        assert_eq!(FeatureStatus::ComingSoon.cta_label(), "Coming Soon");
    }

    #[test]
    fn only_response_time_has_no_trend() {
        let without_trend: Vec<_> = stats().iter().filter(|s| s.trend.is_none()).map(|s| s.title).collect();
        assert_eq!(without_trend, vec!["Avg. Response Time"]);
    }
}

use dioxus::prelude::*;

use mentor_core::model::{FeatureAction, Notice, Tab};

use crate::views::assessment::AssessmentPanel;
use crate::views::chat::ChatPanel;
use crate::views::notices::use_notices;
use crate::vm::{FeatureCardVm, StatCardVm, map_feature_cards, map_stat_cards};

fn tab_class(active: Tab, tab: Tab) -> &'static str {
    if active == tab { "tab tab--active" } else { "tab" }
}

#[component]
pub fn HomeView() -> Element {
    let notices = use_notices();
    let mut active_tab = use_signal(Tab::default);
    let stats = use_hook(map_stat_cards);
    let features = use_hook(map_feature_cards);

    let on_feature = use_callback(move |action: FeatureAction| match action {
        FeatureAction::Open(tab) => active_tab.set(tab),
        FeatureAction::Notify(notice) => notices.push(notice),
    });

    let tab = active_tab();

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h1 { class: "hero__title", "AI 360 Career Mentor" }
                p { class: "hero__lead",
                    "Transform your career journey with AI-powered guidance, personalized insights, and intelligent career planning that adapts to your goals."
                }
                div { class: "hero__actions",
                    button {
                        class: "btn btn-primary btn-lg",
                        r#type: "button",
                        onclick: move |_| active_tab.set(Tab::Chat),
                        "Start Career Chat"
                    }
                    button {
                        class: "btn btn-outline btn-lg",
                        r#type: "button",
                        onclick: move |_| active_tab.set(Tab::Assessment),
                        "Take Assessment"
                    }
                }
            }

            section { class: "stats",
                for stat in stats {
                    StatCard { key: "{stat.title}", stat }
                }
            }

            section { class: "workspace",
                div { class: "tabs", role: "tablist",
                    button {
                        class: tab_class(tab, Tab::Chat),
                        r#type: "button",
                        role: "tab",
                        onclick: move |_| active_tab.set(Tab::Chat),
                        "AI Career Chat"
                    }
                    button {
                        class: tab_class(tab, Tab::Assessment),
                        r#type: "button",
                        role: "tab",
                        onclick: move |_| active_tab.set(Tab::Assessment),
                        "Career Assessment"
                    }
                }
                div { class: "tab-panel", role: "tabpanel",
                    match tab {
                        Tab::Chat => rsx! { ChatPanel {} },
                        Tab::Assessment => rsx! { AssessmentPanel {} },
                    }
                }
            }

            section { class: "features",
                div { class: "section-heading",
                    h2 { "Powerful Career Development Tools" }
                    p { class: "muted", "Comprehensive AI-powered features to accelerate your professional growth" }
                }
                div { class: "features__grid",
                    for feature in features {
                        FeatureCard { key: "{feature.title}", feature, on_action: on_feature }
                    }
                }
            }

            section { class: "cta",
                h2 { "Ready to Accelerate Your Career?" }
                p { "Join thousands of professionals who've transformed their careers with AI guidance" }
                div { class: "cta__actions",
                    button {
                        class: "btn btn-light btn-lg",
                        r#type: "button",
                        onclick: move |_| active_tab.set(Tab::Chat),
                        "Start Free Chat"
                    }
                    button {
                        class: "btn btn-outline-light btn-lg",
                        r#type: "button",
                        onclick: move |_| notices.push(Notice::pro_coming_soon()),
                        "Upgrade to Pro"
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(stat: StatCardVm) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-card__title", "{stat.title}" }
            p { class: "stat-card__value", "{stat.value}" }
            if let Some(trend) = stat.trend_label.as_deref() {
                span { class: stat.trend_class, "{trend}" }
            }
            if let Some(description) = stat.description {
                p { class: "stat-card__description", "{description}" }
            }
        }
    }
}

#[component]
fn FeatureCard(feature: FeatureCardVm, on_action: EventHandler<FeatureAction>) -> Element {
    let action = feature.action.clone();

    rsx! {
        div { class: if feature.enabled { "feature-card" } else { "feature-card feature-card--disabled" },
            div { class: "feature-card__heading",
                h3 { "{feature.title}" }
                if let Some(badge) = feature.badge {
                    span { class: "badge", "{badge}" }
                }
            }
            p { class: "muted", "{feature.description}" }
            ul { class: "feature-card__bullets",
                for bullet in feature.bullets.iter() {
                    li { "{bullet}" }
                }
            }
            button {
                class: "btn btn-primary feature-card__cta",
                r#type: "button",
                disabled: !feature.enabled,
                onclick: move |_| on_action.call(action.clone()),
                "{feature.cta_label}"
            }
        }
    }
}

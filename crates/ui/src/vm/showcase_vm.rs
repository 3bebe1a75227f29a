use mentor_core::model::showcase::{features, stats};
use mentor_core::model::{Feature, FeatureAction, Stat};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub title: &'static str,
    pub value: &'static str,
    pub trend_label: Option<String>,
    pub trend_class: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureCardVm {
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: Vec<&'static str>,
    pub badge: Option<&'static str>,
    pub cta_label: &'static str,
    pub enabled: bool,
    pub action: FeatureAction,
}

fn stat_card(stat: &Stat) -> StatCardVm {
    let (trend_label, trend_class) = match stat.trend {
        Some(trend) if trend.is_positive => (Some(format!("↑{}", trend.value)), "trend trend--up"),
        Some(trend) => (Some(format!("↓{}", trend.value)), "trend trend--down"),
        None => (None, "trend"),
    };
    StatCardVm {
        title: stat.title,
        value: stat.value,
        trend_label,
        trend_class,
        description: stat.description,
    }
}

fn feature_card(feature: &Feature) -> FeatureCardVm {
    FeatureCardVm {
        title: feature.title,
        description: feature.description,
        bullets: feature.bullets.to_vec(),
        badge: feature.status.badge(),
        cta_label: feature.status.cta_label(),
        enabled: feature.status.is_enabled(),
        action: feature.action(),
    }
}

#[must_use]
pub fn map_stat_cards() -> Vec<StatCardVm> {
    stats().iter().map(stat_card).collect()
}

#[must_use]
pub fn map_feature_cards() -> Vec<FeatureCardVm> {
    features().iter().map(feature_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::model::Tab;

    #[test]
    fn stat_trends_render_with_arrows() {
        let cards = map_stat_cards();
        assert_eq!(cards[1].trend_label.as_deref(), Some("↑24%"));
        assert_eq!(cards[1].trend_class, "trend trend--up");
        assert_eq!(cards[3].trend_label, None);
    }

    #[test]
    fn feature_cards_carry_status_presentation() {
        let cards = map_feature_cards();
        assert_eq!(cards[0].action, FeatureAction::Open(Tab::Chat));
        assert_eq!(cards[2].badge, Some("BETA"));
        assert_eq!(cards[2].cta_label, "Try Beta");
        assert!(!cards[3].enabled);
        assert_eq!(cards[3].cta_label, "Coming Soon");
    }
}

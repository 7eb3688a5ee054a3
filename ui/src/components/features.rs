use dioxus::prelude::*;

use crate::components::app_navbar::ViewLink;
use crate::components::app_root::use_translator;
use crate::components::icon::{Accent, Icon, IconGlyph};
use crate::core::routes::AppView;
use crate::i18n::MessageKey;

/// Feature cards of the landing page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Matching,
    Collaboration,
    Automation,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Matching, Feature::Collaboration, Feature::Automation];

    pub fn icon(self) -> Icon {
        match self {
            Feature::Matching => Icon::Search,
            Feature::Collaboration => Icon::Users,
            Feature::Automation => Icon::Zap,
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Feature::Matching => Accent::Blue,
            Feature::Collaboration => Accent::Purple,
            Feature::Automation => Accent::Orange,
        }
    }

    pub fn title_key(self) -> MessageKey {
        match self {
            Feature::Matching => MessageKey::FeatureMatchingTitle,
            Feature::Collaboration => MessageKey::FeatureCollaborationTitle,
            Feature::Automation => MessageKey::FeatureAutomationTitle,
        }
    }

    pub fn body_key(self) -> MessageKey {
        match self {
            Feature::Matching => MessageKey::FeatureMatchingBody,
            Feature::Collaboration => MessageKey::FeatureCollaborationBody,
            Feature::Automation => MessageKey::FeatureAutomationBody,
        }
    }
}

#[component]
pub fn Features() -> Element {
    let t = use_translator();

    rsx! {
        section { id: "features", class: "section features",
            header { class: "section__header",
                span { class: "section__eyebrow", {t.text(MessageKey::FeaturesEyebrow)} }
                h2 { class: "section__title", {t.text(MessageKey::FeaturesTitle)} }
                p { class: "section__subtitle", {t.text(MessageKey::FeaturesSubtitle)} }
            }
            div { class: "features__grid",
                for feature in Feature::ALL {
                    article { key: "{feature.title_key().id()}", class: "feature-card {feature.accent().class()}",
                        div { class: "feature-card__icon",
                            IconGlyph { icon: feature.icon() }
                        }
                        h3 { class: "feature-card__title", {t.text(feature.title_key())} }
                        p { class: "feature-card__body", {t.text(feature.body_key())} }
                        ViewLink { view: AppView::WhatIsLia, class: "feature-card__link",
                            {t.text(MessageKey::FeaturesLearnMore)}
                            IconGlyph { icon: Icon::ArrowRight }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::app_root::use_translator;
use crate::components::icon::{Accent, Icon, IconGlyph};
use crate::components::ViewLink;
use crate::core::routes::AppView;
use crate::i18n::MessageKey;

const PERSPECTIVES: [(Icon, Accent, MessageKey, MessageKey); 3] = [
    (
        Icon::GraduationCap,
        Accent::Purple,
        MessageKey::LiaStudentsTitle,
        MessageKey::LiaStudentsBody,
    ),
    (
        Icon::Briefcase,
        Accent::Orange,
        MessageKey::LiaEmployersTitle,
        MessageKey::LiaEmployersBody,
    ),
    (
        Icon::Building,
        Accent::Green,
        MessageKey::LiaSchoolsTitle,
        MessageKey::LiaSchoolsBody,
    ),
];

/// Explainer page for the LIA concept.
#[component]
pub fn WhatIsLia() -> Element {
    let t = use_translator();

    rsx! {
        div { class: "page page-lia",
            header { class: "section__header",
                h1 { class: "section__title", {t.text(MessageKey::LiaTitle)} }
                p { class: "page-lia__intro", {t.text(MessageKey::LiaIntro)} }
            }
            div { class: "page-lia__grid",
                for (icon, accent, title, body) in PERSPECTIVES {
                    article { key: "{title.id()}", class: "feature-card {accent.class()}",
                        div { class: "feature-card__icon", IconGlyph { icon } }
                        h2 { class: "feature-card__title", {t.text(title)} }
                        p { class: "feature-card__body", {t.text(body)} }
                    }
                }
            }
            div { class: "page-lia__cta",
                p { {t.text(MessageKey::LiaCta)} }
                ViewLink { view: AppView::RequestDemo, class: "button button--primary",
                    {t.text(MessageKey::HeroCta)}
                    IconGlyph { icon: Icon::ArrowRight }
                }
            }
        }
    }
}

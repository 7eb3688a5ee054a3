use dioxus::prelude::*;

use crate::components::app_navbar::ViewLink;
use crate::components::app_root::use_translator;
use crate::components::icon::{Icon, IconGlyph};
use crate::core::routes::AppView;
use crate::i18n::MessageKey;

#[component]
pub fn Hero() -> Element {
    let t = use_translator();

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero__inner",
                span { class: "hero__eyebrow",
                    IconGlyph { icon: Icon::Sparkles }
                    {t.text(MessageKey::HeroEyebrow)}
                }
                h1 { class: "hero__headline",
                    span { class: "hero__headline-primary", {t.text(MessageKey::HeroHeadlinePrimary)} }
                    span { class: "hero__headline-secondary", {t.text(MessageKey::HeroHeadlineSecondary)} }
                }
                p { class: "hero__lead", {t.text(MessageKey::HeroLead)} }
                p { class: "hero__body", {t.text(MessageKey::HeroBody)} }
                div { class: "hero__actions",
                    ViewLink { view: AppView::RequestDemo, class: "button button--primary",
                        {t.text(MessageKey::HeroCta)}
                        IconGlyph { icon: Icon::ArrowRight }
                    }
                }
            }
            a { class: "hero__scroll-hint", href: "#features",
                span { {t.text(MessageKey::HeroScrollHint)} }
                IconGlyph { icon: Icon::ChevronDown }
            }
        }
    }
}

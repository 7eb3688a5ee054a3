use dioxus::prelude::*;

use crate::components::app_root::use_translator;
use crate::components::ViewLink;
use crate::core::routes::AppView;
use crate::demo::DemoForm;
use crate::i18n::MessageKey;

#[component]
pub fn RequestDemo() -> Element {
    let t = use_translator();

    rsx! {
        div { class: "page page-demo",
            header { class: "section__header",
                h1 { class: "section__title", {t.text(MessageKey::DemoTitle)} }
                p { class: "section__subtitle", {t.text(MessageKey::DemoSubtitle)} }
            }
            DemoForm {}
            p { class: "page-demo__learn-more",
                ViewLink { view: AppView::WhatIsLia, class: "page-demo__link",
                    {t.text(MessageKey::DemoLearnMore)}
                }
            }
        }
    }
}

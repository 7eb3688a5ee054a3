use dioxus::prelude::*;

use crate::components::app_navbar::ViewLink;
use crate::components::app_root::use_translator;
use crate::components::icon::{Icon, IconGlyph};
use crate::core::routes::AppView;
use crate::i18n::MessageKey;

/// Fixed "book a demo" button shown on every page but the demo form itself.
#[component]
pub fn FloatingDemoButton() -> Element {
    let t = use_translator();

    rsx! {
        div { class: "floating-cta",
            ViewLink { view: AppView::RequestDemo, class: "button button--accent floating-cta__button",
                IconGlyph { icon: Icon::MessageCircle }
                span { {t.text(MessageKey::FloatingCta)} }
            }
        }
    }
}

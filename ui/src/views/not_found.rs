use dioxus::prelude::*;

use crate::components::app_root::use_translator;
use crate::components::ViewLink;
use crate::core::routes::AppView;
use crate::i18n::MessageKey;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let t = use_translator();
    tracing::debug!(path = %format!("/{}", segments.join("/")), "no view for path");

    rsx! {
        div { class: "page page-not-found",
            h1 { {t.text(MessageKey::NotFoundTitle)} }
            p { {t.text(MessageKey::NotFoundBody)} }
            ViewLink { view: AppView::Home, class: "button button--ghost",
                {t.text(MessageKey::NotFoundHome)}
            }
        }
    }
}

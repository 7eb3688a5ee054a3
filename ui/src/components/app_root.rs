use dioxus::prelude::*;

use crate::core::preferences::{use_preferences, use_preferences_provider};
use crate::i18n::{SharedCatalog, Translator};

// Shared theme: colour tokens for both modes plus all section styling.
const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Root of every page tree.
///
/// Builds the content catalog once, creates the preferences store and
/// provides both through context. The wrapper carries `data-theme` so the
/// dark token block in the theme applies to everything below it.
#[component]
pub fn AppRoot(children: Element) -> Element {
    let catalog = use_hook(SharedCatalog::load_or_empty);
    use_context_provider(|| catalog.clone());

    let prefs = use_preferences_provider();
    let theme = prefs.theme();
    let locale = prefs.locale();

    tracing::debug!(locale = locale.code(), theme = theme.as_str(), "app root render");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        div {
            class: "app",
            "data-theme": theme.as_str(),
            lang: locale.code(),
            {children}
        }
    }
}

/// Translator for the active locale. Subscribes the caller to locale changes.
pub fn use_translator() -> Translator {
    let catalog = use_context::<SharedCatalog>();
    let prefs = use_preferences();
    Translator::new(catalog, prefs.locale())
}

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::app_root::use_translator;
use crate::components::icon::{Icon, IconGlyph};
use crate::core::preferences::use_preferences;
use crate::core::routes::AppView;
use crate::i18n::MessageKey;

// Navbar stylesheet (inlined as well in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// How a platform builds a link to one of the named views.
///
/// `ui` does not know the platform's `Route` enum, so the platform registers a
/// builder before rendering the root:
///
/// ```ignore
/// fn view_link(view: AppView, class: String, children: Element) -> Element {
///     rsx!(Link { class, to: Route::from(view), {children} })
/// }
///
/// register_nav(NavBuilder { link: view_link });
/// ```
///
/// Without a registered builder [`ViewLink`] renders a plain anchor to
/// [`AppView::path`], which is enough for server rendering and tests.
pub struct NavBuilder {
    pub link: fn(view: AppView, class: String, children: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

/// Link to a named view through the registered [`NavBuilder`].
#[component]
pub fn ViewLink(
    view: AppView,
    #[props(default = "navbar__link".to_string())] class: String,
    children: Element,
) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(view, class, children),
        None => rsx! {
            a { class: "{class}", href: view.path(), {children} }
        },
    }
}

#[component]
pub fn AppNavbar() -> Element {
    let t = use_translator();
    let mut prefs = use_preferences();
    let mut menu_open = use_signal(|| false);

    let theme = prefs.theme();
    let (theme_icon, theme_label) = if theme.is_dark() {
        (Icon::Sun, t.text(MessageKey::NavThemeToLight))
    } else {
        (Icon::Moon, t.text(MessageKey::NavThemeToDark))
    };
    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                ViewLink { view: AppView::Home, class: "navbar__brand",
                    span { class: "navbar__brand-mark", {t.text(MessageKey::BrandName)} }
                    span { class: "navbar__brand-subtitle", {t.text(MessageKey::BrandTagline)} }
                }

                button {
                    r#type: "button",
                    class: "navbar__menu-toggle",
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    IconGlyph { icon: Icon::ChevronDown }
                }

                nav { class: "{links_class}", onclick: move |_| menu_open.set(false),
                    for view in AppView::ALL {
                        ViewLink { key: "{view.path()}", view,
                            {t.text(view.nav_label_key())}
                        }
                    }
                }

                div { class: "navbar__controls",
                    button {
                        r#type: "button",
                        class: "navbar__locale",
                        lang: prefs.locale().toggled().code(),
                        title: t.text(MessageKey::NavLanguageSwitchLabel),
                        aria_label: t.text(MessageKey::NavLanguageSwitchLabel),
                        onclick: move |_| prefs.toggle_locale(),
                        IconGlyph { icon: Icon::Globe }
                        span { {t.text(MessageKey::NavLanguageSwitch)} }
                    }
                    button {
                        r#type: "button",
                        class: "navbar__theme",
                        title: "{theme_label}",
                        aria_label: "{theme_label}",
                        onclick: move |_| prefs.toggle_theme(),
                        IconGlyph { icon: theme_icon }
                    }
                }
            }
        }
    }
}

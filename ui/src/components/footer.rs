use dioxus::prelude::*;
use fluent::FluentArgs;

use crate::components::app_navbar::ViewLink;
use crate::components::app_root::use_translator;
use crate::components::icon::{Icon, IconGlyph};
use crate::core::preferences::use_preferences;
use crate::core::routes::AppView;
use crate::core::timing;
use crate::i18n::{Locale, MessageKey};

const LINKEDIN_URL: &str = "https://www.linkedin.com/company/liahub";

#[component]
pub fn SiteFooter() -> Element {
    let t = use_translator();
    let mut prefs = use_preferences();
    let year = use_hook(timing::current_year);

    let mut copyright_args = FluentArgs::new();
    copyright_args.set("year", year);

    let email = t.text(MessageKey::FooterEmail);
    let phone = t.text(MessageKey::FooterPhone);
    let phone_href = format!("tel:{}", phone.replace(' ', ""));
    let theme_icon = if prefs.theme().is_dark() { Icon::Sun } else { Icon::Moon };

    let on_language = move |evt: FormEvent| match Locale::from_code(&evt.value()) {
        Some(locale) => prefs.set_locale(locale),
        None => tracing::warn!(value = %evt.value(), "unsupported language in footer picker"),
    };

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__column footer__company",
                    span { class: "footer__brand", {t.text(MessageKey::BrandName)} }
                    p { {t.text(MessageKey::FooterDescription)} }
                    span { class: "footer__badge",
                        IconGlyph { icon: Icon::Shield }
                        {t.text(MessageKey::FooterCompliance)}
                    }
                    span { class: "footer__org", {t.text(MessageKey::FooterOrgNumber)} }
                }

                nav { class: "footer__column",
                    h4 { {t.text(MessageKey::FooterNavigationHeading)} }
                    for view in AppView::ALL {
                        ViewLink { key: "{view.path()}", view, class: "footer__link",
                            {t.text(view.nav_label_key())}
                        }
                    }
                }

                div { class: "footer__column",
                    h4 { {t.text(MessageKey::FooterContactHeading)} }
                    ViewLink { view: AppView::RequestDemo, class: "footer__link",
                        IconGlyph { icon: Icon::MessageCircle }
                        {t.text(MessageKey::FooterDemo)}
                    }
                    a { class: "footer__link", href: "mailto:{email}",
                        IconGlyph { icon: Icon::Mail }
                        "{email}"
                    }
                    a { class: "footer__link", href: "{phone_href}",
                        IconGlyph { icon: Icon::Phone }
                        "{phone}"
                    }
                    a { class: "footer__link", href: LINKEDIN_URL, target: "_blank", rel: "noopener noreferrer",
                        IconGlyph { icon: Icon::Linkedin }
                        {t.text(MessageKey::FooterLinkedin)}
                    }
                }

                div { class: "footer__column footer__preferences",
                    label { r#for: "footer-language", {t.text(MessageKey::FooterLanguageHeading)} }
                    select {
                        id: "footer-language",
                        class: "footer__select",
                        value: "{prefs.locale().code()}",
                        onchange: on_language,
                        for locale in Locale::ALL {
                            option {
                                key: "{locale.code()}",
                                value: "{locale.code()}",
                                selected: locale == prefs.locale(),
                                "{locale.native_name()}"
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost footer__theme",
                        onclick: move |_| prefs.toggle_theme(),
                        IconGlyph { icon: theme_icon }
                        {t.text(MessageKey::FooterThemeToggle)}
                    }
                }
            }

            div { class: "footer__bottom",
                span { class: "footer__copyright", {t.text_with(MessageKey::FooterCopyright, &copyright_args)} }
                div { class: "footer__legal",
                    a { class: "footer__link", href: "#privacy", {t.text(MessageKey::FooterLegalPrivacy)} }
                    a { class: "footer__link", href: "#terms", {t.text(MessageKey::FooterLegalTerms)} }
                    a { class: "footer__link", href: "#cookies", {t.text(MessageKey::FooterLegalCookies)} }
                }
            }
        }
    }
}

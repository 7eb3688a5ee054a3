use dioxus::prelude::*;

use crate::components::app_root::use_translator;
use crate::components::icon::{Accent, Icon, IconGlyph};
use crate::i18n::MessageKey;

/// Education levels whose internship periods the platform can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternshipLevel {
    UpperSecondary,
    Adapted,
    Adult,
    University,
    Informal,
}

impl InternshipLevel {
    pub const ALL: [InternshipLevel; 5] = [
        InternshipLevel::UpperSecondary,
        InternshipLevel::Adapted,
        InternshipLevel::Adult,
        InternshipLevel::University,
        InternshipLevel::Informal,
    ];

    pub fn icon(self) -> Icon {
        match self {
            InternshipLevel::UpperSecondary => Icon::Briefcase,
            InternshipLevel::Adapted => Icon::Users,
            InternshipLevel::Adult => Icon::TrendingUp,
            InternshipLevel::University => Icon::GraduationCap,
            InternshipLevel::Informal => Icon::Sun,
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            InternshipLevel::UpperSecondary => Accent::Blue,
            InternshipLevel::Adapted => Accent::Green,
            InternshipLevel::Adult => Accent::Orange,
            InternshipLevel::University => Accent::Purple,
            InternshipLevel::Informal => Accent::Teal,
        }
    }

    /// `(level, term, body)` message keys.
    pub fn keys(self) -> (MessageKey, MessageKey, MessageKey) {
        match self {
            InternshipLevel::UpperSecondary => (
                MessageKey::TypesUpperSecondaryLevel,
                MessageKey::TypesUpperSecondaryTerm,
                MessageKey::TypesUpperSecondaryBody,
            ),
            InternshipLevel::Adapted => (
                MessageKey::TypesAdaptedLevel,
                MessageKey::TypesAdaptedTerm,
                MessageKey::TypesAdaptedBody,
            ),
            InternshipLevel::Adult => (
                MessageKey::TypesAdultLevel,
                MessageKey::TypesAdultTerm,
                MessageKey::TypesAdultBody,
            ),
            InternshipLevel::University => (
                MessageKey::TypesUniversityLevel,
                MessageKey::TypesUniversityTerm,
                MessageKey::TypesUniversityBody,
            ),
            InternshipLevel::Informal => (
                MessageKey::TypesInformalLevel,
                MessageKey::TypesInformalTerm,
                MessageKey::TypesInformalBody,
            ),
        }
    }
}

#[component]
pub fn InternshipTypes() -> Element {
    let t = use_translator();

    rsx! {
        section { id: "internship-types", class: "section types",
            header { class: "section__header",
                h2 { class: "section__title", {t.text(MessageKey::TypesTitle)} }
                p { class: "section__subtitle", {t.text(MessageKey::TypesBody)} }
            }
            div { class: "types__grid",
                for level in InternshipLevel::ALL {
                    {
                        let (level_key, term_key, body_key) = level.keys();
                        rsx! {
                            article { key: "{level_key.id()}", class: "type-card {level.accent().class()}",
                                div { class: "type-card__icon", IconGlyph { icon: level.icon() } }
                                h3 { class: "type-card__level", {t.text(level_key)} }
                                span { class: "type-card__term", {t.text(term_key)} }
                                p { class: "type-card__body", {t.text(body_key)} }
                            }
                        }
                    }
                }
            }
            p { class: "types__note",
                IconGlyph { icon: Icon::Shield }
                {t.text(MessageKey::TypesNote)}
            }
        }
    }
}

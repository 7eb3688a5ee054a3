use std::collections::HashSet;

use dioxus::prelude::*;

use crate::components::app_root::use_translator;
use crate::components::icon::{Accent, Icon, IconGlyph};
use crate::i18n::MessageKey;

/// Tabs of the "who is it for" section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Audience {
    #[default]
    Applicants,
    Schools,
    Employers,
}

/// Title and body of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudiencePoint {
    pub title: MessageKey,
    pub body: MessageKey,
}

const fn point(title: MessageKey, body: MessageKey) -> AudiencePoint {
    AudiencePoint { title, body }
}

const APPLICANT_POINTS: [AudiencePoint; 6] = [
    point(MessageKey::AudienceApplicants1Title, MessageKey::AudienceApplicants1Body),
    point(MessageKey::AudienceApplicants2Title, MessageKey::AudienceApplicants2Body),
    point(MessageKey::AudienceApplicants3Title, MessageKey::AudienceApplicants3Body),
    point(MessageKey::AudienceApplicants4Title, MessageKey::AudienceApplicants4Body),
    point(MessageKey::AudienceApplicants5Title, MessageKey::AudienceApplicants5Body),
    point(MessageKey::AudienceApplicants6Title, MessageKey::AudienceApplicants6Body),
];

const SCHOOL_POINTS: [AudiencePoint; 6] = [
    point(MessageKey::AudienceSchools1Title, MessageKey::AudienceSchools1Body),
    point(MessageKey::AudienceSchools2Title, MessageKey::AudienceSchools2Body),
    point(MessageKey::AudienceSchools3Title, MessageKey::AudienceSchools3Body),
    point(MessageKey::AudienceSchools4Title, MessageKey::AudienceSchools4Body),
    point(MessageKey::AudienceSchools5Title, MessageKey::AudienceSchools5Body),
    point(MessageKey::AudienceSchools6Title, MessageKey::AudienceSchools6Body),
];

const EMPLOYER_POINTS: [AudiencePoint; 6] = [
    point(MessageKey::AudienceEmployers1Title, MessageKey::AudienceEmployers1Body),
    point(MessageKey::AudienceEmployers2Title, MessageKey::AudienceEmployers2Body),
    point(MessageKey::AudienceEmployers3Title, MessageKey::AudienceEmployers3Body),
    point(MessageKey::AudienceEmployers4Title, MessageKey::AudienceEmployers4Body),
    point(MessageKey::AudienceEmployers5Title, MessageKey::AudienceEmployers5Body),
    point(MessageKey::AudienceEmployers6Title, MessageKey::AudienceEmployers6Body),
];

impl Audience {
    pub const ALL: [Audience; 3] = [Audience::Applicants, Audience::Schools, Audience::Employers];

    pub fn tab_key(self) -> MessageKey {
        match self {
            Audience::Applicants => MessageKey::AudienceTabApplicants,
            Audience::Schools => MessageKey::AudienceTabSchools,
            Audience::Employers => MessageKey::AudienceTabEmployers,
        }
    }

    pub fn title_key(self) -> MessageKey {
        match self {
            Audience::Applicants => MessageKey::AudienceApplicantsTitle,
            Audience::Schools => MessageKey::AudienceSchoolsTitle,
            Audience::Employers => MessageKey::AudienceEmployersTitle,
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Audience::Applicants => Icon::GraduationCap,
            Audience::Schools => Icon::Building,
            Audience::Employers => Icon::Briefcase,
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Audience::Applicants => Accent::Purple,
            Audience::Schools => Accent::Green,
            Audience::Employers => Accent::Orange,
        }
    }

    pub fn points(self) -> &'static [AudiencePoint] {
        match self {
            Audience::Applicants => &APPLICANT_POINTS,
            Audience::Schools => &SCHOOL_POINTS,
            Audience::Employers => &EMPLOYER_POINTS,
        }
    }
}

#[component]
pub fn Audiences() -> Element {
    let t = use_translator();
    let mut active = use_signal(Audience::default);
    let mut expanded = use_signal(HashSet::<(Audience, usize)>::new);

    let current = active();
    let accent = current.accent().class();

    rsx! {
        section { id: "audiences", class: "section audiences",
            div { class: "audiences__tabs", role: "tablist",
                for audience in Audience::ALL {
                    {
                        let selected = audience == current;
                        let class = if selected {
                            format!("audiences__tab audiences__tab--active {accent}")
                        } else {
                            "audiences__tab".to_string()
                        };
                        rsx! {
                            button {
                                key: "{audience.tab_key().id()}",
                                r#type: "button",
                                role: "tab",
                                class: "{class}",
                                aria_selected: "{selected}",
                                onclick: move |_| active.set(audience),
                                IconGlyph { icon: audience.icon() }
                                {t.text(audience.tab_key())}
                            }
                        }
                    }
                }
            }

            h2 { class: "section__title audiences__title", {t.text(current.title_key())} }

            div { class: "audiences__grid", role: "tabpanel",
                for (index, item) in current.points().iter().enumerate() {
                    {
                        let open = expanded.read().contains(&(current, index));
                        let class = if open {
                            format!("audience-card audience-card--open {accent}")
                        } else {
                            format!("audience-card {accent}")
                        };
                        rsx! {
                            article {
                                key: "{item.title.id()}",
                                class: "{class}",
                                onclick: move |_| {
                                    let mut cards = expanded.write();
                                    if !cards.remove(&(current, index)) {
                                        cards.insert((current, index));
                                    }
                                },
                                div { class: "audience-card__header",
                                    span { class: "audience-card__index", "{index + 1}" }
                                    h3 { class: "audience-card__title", {t.text(item.title)} }
                                }
                                if open {
                                    p { class: "audience-card__body", {t.text(item.body)} }
                                }
                                span { class: "audience-card__toggle",
                                    if open {
                                        {t.text(MessageKey::AudienceShowLess)}
                                    } else {
                                        {t.text(MessageKey::AudienceShowMore)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

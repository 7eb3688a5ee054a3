use std::time::Duration;

use dioxus::prelude::*;
use fluent::FluentArgs;

use crate::components::app_root::use_translator;
use crate::components::icon::{Accent, Icon, IconGlyph};
use crate::core::timing;
use crate::i18n::MessageKey;

/// Time each step stays highlighted before the carousel moves on.
pub const STEP_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStep {
    Discover,
    Manage,
    Evaluate,
}

impl ProcessStep {
    pub const ALL: [ProcessStep; 3] = [
        ProcessStep::Discover,
        ProcessStep::Manage,
        ProcessStep::Evaluate,
    ];

    pub fn icon(self) -> Icon {
        match self {
            ProcessStep::Discover => Icon::Search,
            ProcessStep::Manage => Icon::Clock,
            ProcessStep::Evaluate => Icon::BarChart,
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            ProcessStep::Discover => Accent::Blue,
            ProcessStep::Manage => Accent::Teal,
            ProcessStep::Evaluate => Accent::Purple,
        }
    }

    pub fn title_key(self) -> MessageKey {
        match self {
            ProcessStep::Discover => MessageKey::HowDiscoverTitle,
            ProcessStep::Manage => MessageKey::HowManageTitle,
            ProcessStep::Evaluate => MessageKey::HowEvaluateTitle,
        }
    }

    pub fn body_key(self) -> MessageKey {
        match self {
            ProcessStep::Discover => MessageKey::HowDiscoverBody,
            ProcessStep::Manage => MessageKey::HowManageBody,
            ProcessStep::Evaluate => MessageKey::HowEvaluateBody,
        }
    }
}

/// Position of the step carousel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCycle {
    active: usize,
}

impl StepCycle {
    pub fn active(self) -> usize {
        self.active
    }

    pub fn step(self) -> ProcessStep {
        ProcessStep::ALL[self.active]
    }

    /// Next step, wrapping after the last one.
    pub fn advance(&mut self) {
        self.active = (self.active + 1) % ProcessStep::ALL.len();
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < ProcessStep::ALL.len() {
            self.active = index;
        }
    }
}

#[component]
pub fn HowItWorks() -> Element {
    let t = use_translator();
    let mut cycle = use_signal(StepCycle::default);

    // Owned by this scope: stops when the section unmounts.
    use_future(move || async move {
        loop {
            timing::sleep(STEP_INTERVAL).await;
            cycle.with_mut(StepCycle::advance);
        }
    });

    let current = cycle();
    let active_step = current.step();
    let mut counter_args = FluentArgs::new();
    counter_args.set("current", current.active() + 1);
    counter_args.set("total", ProcessStep::ALL.len());

    rsx! {
        section { id: "how-it-works", class: "section how",
            header { class: "section__header",
                span { class: "section__eyebrow", {t.text(MessageKey::HowEyebrow)} }
                h2 { class: "section__title", {t.text(MessageKey::HowTitle)} }
                p { class: "section__subtitle", {t.text(MessageKey::HowSubtitle)} }
            }
            div { class: "how__layout",
                ol { class: "how__steps",
                    for (index, step) in ProcessStep::ALL.into_iter().enumerate() {
                        {
                            let class = if index == current.active() {
                                format!("how__step how__step--active {}", step.accent().class())
                            } else {
                                "how__step".to_string()
                            };
                            rsx! {
                                li { key: "{step.title_key().id()}", class: "{class}",
                                    button {
                                        r#type: "button",
                                        class: "how__step-button",
                                        onclick: move |_| cycle.with_mut(|c| c.select(index)),
                                        span { class: "how__step-icon", IconGlyph { icon: step.icon() } }
                                        span { class: "how__step-title", {t.text(step.title_key())} }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "how__panel {active_step.accent().class()}",
                    span { class: "how__counter", {t.text_with(MessageKey::HowStepCounter, &counter_args)} }
                    h3 { class: "how__panel-title", {t.text(active_step.title_key())} }
                    p { class: "how__panel-body", {t.text(active_step.body_key())} }
                    div { class: "how__progress",
                        for index in 0..ProcessStep::ALL.len() {
                            span {
                                key: "{index}",
                                class: "how__dot",
                                "data-active": index == current.active(),
                            }
                        }
                    }
                }
            }
        }
    }
}

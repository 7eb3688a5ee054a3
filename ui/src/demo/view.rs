use api::InterestCategory;
use dioxus::prelude::*;

use crate::components::app_root::use_translator;
use crate::components::icon::{Icon, IconGlyph};
use crate::i18n::{MessageKey, Translator};

use super::engine::{submit_and_confirm, DemoRequestForm, FormPhase, CONFIRMATION_RESET};
use super::submission::use_submission_channel;
use super::validation::FormField;

fn interest_label(category: InterestCategory) -> MessageKey {
    match category {
        InterestCategory::Student => MessageKey::DemoInterestStudent,
        InterestCategory::Employer => MessageKey::DemoInterestEmployer,
        InterestCategory::School => MessageKey::DemoInterestSchool,
    }
}

fn field_error_text(t: &Translator, form: &DemoRequestForm, field: FormField) -> Option<String> {
    form.field_error(field).map(|issue| t.text(issue.message_key()))
}

#[component]
pub fn DemoForm() -> Element {
    let t = use_translator();
    let channel = use_submission_channel();
    let mut form = use_signal(DemoRequestForm::new);

    let state = form();
    let phase = state.phase();
    let locked = !phase.is_editing();
    let submitting = matches!(phase, FormPhase::Submitting { .. });

    // The task belongs to this scope, so leaving the page cancels a pending
    // submission or reset timer.
    let on_submit = move |_: MouseEvent| {
        spawn(async move {
            if let Err(err) = submit_and_confirm(form, channel, CONFIRMATION_RESET).await {
                tracing::debug!("submit attempt not started: {err}");
            }
        });
    };

    if let FormPhase::Submitted { .. } = phase {
        return rsx! {
            div { class: "demo-form demo-form--submitted", role: "status",
                IconGlyph { icon: Icon::CheckCircle, class: "icon demo-form__success-icon" }
                h3 { class: "demo-form__success-title", {t.text(MessageKey::DemoSuccessTitle)} }
                p { {t.text(MessageKey::DemoSuccessBody)} }
            }
        };
    }

    let interest_error = field_error_text(&t, &state, FormField::Interest);
    let message_value = state.draft().message.clone();
    let selected_interest = state.draft().interest.clone();
    let consent_error = field_error_text(&t, &state, FormField::Consent);
    let consent_class = if consent_error.is_some() {
        "demo-form__consent demo-form__field--invalid"
    } else {
        "demo-form__consent"
    };
    let submit_class = if state.is_ready() {
        "button button--primary demo-form__submit demo-form__submit--ready"
    } else {
        "button button--primary demo-form__submit"
    };

    rsx! {
        form {
            class: "demo-form",
            novalidate: true,
            onsubmit: move |evt| evt.prevent_default(),

            h3 { class: "demo-form__heading", {t.text(MessageKey::DemoDetailsHeading)} }

            if let Some(banner) = state.banner() {
                div { class: "demo-form__banner", role: "alert", title: "{banner}",
                    IconGlyph { icon: Icon::Warning }
                    {t.text(MessageKey::DemoSubmissionFailed)}
                }
            }
            if !state.errors().is_empty() {
                p { class: "demo-form__summary", role: "alert", {t.text(MessageKey::DemoErrorSummary)} }
            }

            for field in FormField::TEXT_INPUTS {
                {
                    let error = field_error_text(&t, &state, field);
                    let value = state.draft().value(field).to_string();
                    let placeholder = field
                        .placeholder_key()
                        .map(|key| t.text(key))
                        .unwrap_or_default();
                    let class = if error.is_some() {
                        "demo-form__field demo-form__field--invalid"
                    } else {
                        "demo-form__field"
                    };
                    rsx! {
                        div { key: "{field.input_id()}", class: "{class}",
                            label { r#for: field.input_id(),
                                {t.text(field.label_key())}
                                if field.is_required() {
                                    span { class: "demo-form__required", title: t.text(MessageKey::DemoRequired), " *" }
                                }
                            }
                            input {
                                id: field.input_id(),
                                r#type: field.input_type(),
                                value: "{value}",
                                placeholder: "{placeholder}",
                                readonly: locked,
                                aria_invalid: error.is_some(),
                                oninput: move |evt: FormEvent| {
                                    form.with_mut(|f| f.update(field, evt.value()));
                                },
                            }
                            if let Some(message) = &error {
                                span { class: "demo-form__error", "{message}" }
                            }
                        }
                    }
                }
            }

            div { class: "demo-form__field",
                label { r#for: FormField::Interest.input_id(), {t.text(FormField::Interest.label_key())} }
                select {
                    id: FormField::Interest.input_id(),
                    value: "{selected_interest}",
                    disabled: locked,
                    onchange: move |evt: FormEvent| {
                        form.with_mut(|f| f.update(FormField::Interest, evt.value()));
                    },
                    for category in InterestCategory::ALL {
                        option {
                            key: "{category}",
                            value: category.as_str(),
                            selected: selected_interest == category.as_str()
                                || (selected_interest.is_empty() && category == InterestCategory::default()),
                            {t.text(interest_label(category))}
                        }
                    }
                }
                if let Some(message) = &interest_error {
                    span { class: "demo-form__error", "{message}" }
                }
            }

            div { class: "demo-form__field",
                label { r#for: FormField::Message.input_id(), {t.text(FormField::Message.label_key())} }
                textarea {
                    id: FormField::Message.input_id(),
                    rows: "4",
                    value: "{message_value}",
                    placeholder: t.text(MessageKey::DemoPlaceholderMessage),
                    readonly: locked,
                    oninput: move |evt: FormEvent| {
                        form.with_mut(|f| f.update(FormField::Message, evt.value()));
                    },
                }
            }

            div { class: consent_class,
                input {
                    id: FormField::Consent.input_id(),
                    r#type: "checkbox",
                    checked: state.draft().consent,
                    disabled: locked,
                    onchange: move |evt: FormEvent| {
                        form.with_mut(|f| f.set_consent(evt.checked()));
                    },
                }
                label { r#for: FormField::Consent.input_id(), {t.text(MessageKey::DemoConsent)} }
                if let Some(message) = &consent_error {
                    span { class: "demo-form__error", "{message}" }
                }
            }

            button {
                r#type: "button",
                class: submit_class,
                disabled: submitting,
                onclick: on_submit,
                if submitting {
                    {t.text(MessageKey::DemoSubmitting)}
                } else {
                    {t.text(MessageKey::DemoSubmit)}
                }
            }
        }
    }
}

//! Submit-time validation of the demo request draft.

use std::fmt;

pub use api::is_email_shaped;
use api::{DemoRequest, InterestCategory};
use thiserror::Error;

use crate::i18n::MessageKey;

use super::engine::DemoRequestDraft;

/// Inputs of the demo request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Organization,
    Role,
    Interest,
    Message,
    Consent,
}

impl FormField {
    /// Single-line text inputs, in form order.
    pub const TEXT_INPUTS: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Organization,
        FormField::Role,
    ];

    /// DOM id of the input element.
    pub fn input_id(self) -> &'static str {
        match self {
            FormField::Name => "demo-name",
            FormField::Email => "demo-email",
            FormField::Phone => "demo-phone",
            FormField::Organization => "demo-organization",
            FormField::Role => "demo-role",
            FormField::Interest => "demo-interest",
            FormField::Message => "demo-message",
            FormField::Consent => "demo-consent",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Phone => "tel",
            FormField::Consent => "checkbox",
            _ => "text",
        }
    }

    pub fn label_key(self) -> MessageKey {
        match self {
            FormField::Name => MessageKey::DemoFieldName,
            FormField::Email => MessageKey::DemoFieldEmail,
            FormField::Phone => MessageKey::DemoFieldPhone,
            FormField::Organization => MessageKey::DemoFieldOrganization,
            FormField::Role => MessageKey::DemoFieldRole,
            FormField::Interest => MessageKey::DemoFieldInterest,
            FormField::Message => MessageKey::DemoFieldMessage,
            FormField::Consent => MessageKey::DemoConsent,
        }
    }

    pub fn placeholder_key(self) -> Option<MessageKey> {
        match self {
            FormField::Name => Some(MessageKey::DemoPlaceholderName),
            FormField::Email => Some(MessageKey::DemoPlaceholderEmail),
            FormField::Phone => Some(MessageKey::DemoPlaceholderPhone),
            FormField::Organization => Some(MessageKey::DemoPlaceholderOrganization),
            FormField::Role => Some(MessageKey::DemoPlaceholderRole),
            FormField::Message => Some(MessageKey::DemoPlaceholderMessage),
            FormField::Interest | FormField::Consent => None,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Email | FormField::Organization | FormField::Consent
        )
    }
}

/// One field-level problem found at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("name is required")]
    NameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("email is not of the form local@domain.tld")]
    EmailInvalid,
    #[error("organization is required")]
    OrganizationRequired,
    #[error("unknown interest category `{0}`")]
    UnknownInterest(String),
    #[error("consent was not given")]
    ConsentRequired,
}

impl ValidationIssue {
    pub fn field(&self) -> FormField {
        match self {
            ValidationIssue::NameRequired => FormField::Name,
            ValidationIssue::EmailRequired | ValidationIssue::EmailInvalid => FormField::Email,
            ValidationIssue::OrganizationRequired => FormField::Organization,
            ValidationIssue::UnknownInterest(_) => FormField::Interest,
            ValidationIssue::ConsentRequired => FormField::Consent,
        }
    }

    pub fn message_key(&self) -> MessageKey {
        match self {
            ValidationIssue::NameRequired => MessageKey::DemoErrorNameRequired,
            ValidationIssue::EmailRequired => MessageKey::DemoErrorEmailRequired,
            ValidationIssue::EmailInvalid => MessageKey::DemoErrorEmailInvalid,
            ValidationIssue::OrganizationRequired => MessageKey::DemoErrorOrganizationRequired,
            ValidationIssue::UnknownInterest(_) => MessageKey::DemoErrorInterestInvalid,
            ValidationIssue::ConsentRequired => MessageKey::DemoErrorConsentRequired,
        }
    }
}

/// Every issue found in one draft, at most one per field, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn for_field(&self, field: FormField) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.field() == field)
    }

    /// Drop the issue for `field`, e.g. once the user edits it.
    pub fn clear_field(&mut self, field: FormField) {
        self.issues.retain(|issue| issue.field() != field);
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        write!(f, "invalid demo request: {}", reasons.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check every rule and build the wire request from the trimmed draft.
pub fn validate(draft: &DemoRequestDraft) -> Result<DemoRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.push(ValidationIssue::NameRequired);
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.push(ValidationIssue::EmailRequired);
    } else if !is_email_shaped(email) {
        errors.push(ValidationIssue::EmailInvalid);
    }

    let organization = draft.organization.trim();
    if organization.is_empty() {
        errors.push(ValidationIssue::OrganizationRequired);
    }

    let interest = match draft.interest.trim() {
        "" => Some(InterestCategory::default()),
        raw => match raw.parse::<InterestCategory>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.push(ValidationIssue::UnknownInterest(raw.to_string()));
                None
            }
        },
    };

    if !draft.consent {
        errors.push(ValidationIssue::ConsentRequired);
    }

    match interest {
        Some(interest) if errors.is_empty() => Ok(DemoRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(&draft.phone),
            organization: organization.to_string(),
            role: optional(&draft.role),
            interest,
            message: optional(&draft.message),
            consent: true,
        }),
        _ => Err(errors),
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

//! State machine for the demo request form.
//!
//! ```text
//! Editing --begin_submission--> Submitting{cycle} --finish(Ok)--> Submitted{cycle}
//!    ^                               |                                  |
//!    +---------- finish(Err) --------+        expire_confirmation ------+
//! ```
//!
//! Each submit attempt gets a fresh cycle id. Completions and timers carry the
//! id they were started for and are ignored once the form has moved on.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::{DemoRequest, SubmissionReceipt};
use dioxus::prelude::*;

use crate::core::timing;
use crate::error::{FormError, SubmissionError};

use super::submission::SubmissionChannel;
use super::validation::{validate, FormField, ValidationErrors, ValidationIssue};

/// How long the confirmation stays up before the form is cleared.
pub const CONFIRMATION_RESET: Duration = Duration::from_secs(5);

/// Raw input as typed. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoRequestDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub role: String,
    /// Wire name of the category; empty means the default (`student`).
    pub interest: String,
    pub message: String,
    pub consent: bool,
}

impl DemoRequestDraft {
    /// Current text of `field`. Consent renders as `"true"`/`"false"`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Organization => &self.organization,
            FormField::Role => &self.role,
            FormField::Interest => &self.interest,
            FormField::Message => &self.message,
            FormField::Consent => {
                if self.consent {
                    "true"
                } else {
                    "false"
                }
            }
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Organization => self.organization = value,
            FormField::Role => self.role = value,
            FormField::Interest => self.interest = value,
            FormField::Message => self.message = value,
            FormField::Consent => self.consent = matches!(value.as_str(), "true" | "on"),
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting { cycle: u64 },
    Submitted { cycle: u64 },
}

impl FormPhase {
    pub fn is_editing(self) -> bool {
        matches!(self, FormPhase::Editing)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoRequestForm {
    draft: DemoRequestDraft,
    phase: FormPhase,
    cycle: u64,
    errors: ValidationErrors,
    banner: Option<SubmissionError>,
    receipt: Option<SubmissionReceipt>,
}

impl Default for DemoRequestForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoRequestForm {
    pub fn new() -> Self {
        Self {
            draft: DemoRequestDraft::default(),
            phase: FormPhase::Editing,
            cycle: 0,
            errors: ValidationErrors::default(),
            banner: None,
            receipt: None,
        }
    }

    /// Edit one field. Ignored outside `Editing`; returns whether it applied.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if !self.phase.is_editing() {
            return false;
        }
        self.draft.set(field, value.into());
        self.errors.clear_field(field);
        true
    }

    pub fn set_consent(&mut self, consent: bool) -> bool {
        if !self.phase.is_editing() {
            return false;
        }
        self.draft.consent = consent;
        self.errors.clear_field(FormField::Consent);
        true
    }

    pub fn draft(&self) -> &DemoRequestDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn field_error(&self, field: FormField) -> Option<&ValidationIssue> {
        self.errors.for_field(field)
    }

    /// The error banner left by the last failed submission.
    pub fn banner(&self) -> Option<&SubmissionError> {
        self.banner.as_ref()
    }

    /// Receipt of the confirmed submission while `Submitted`.
    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    /// Whether a submit attempt right now would pass validation.
    pub fn is_ready(&self) -> bool {
        self.phase.is_editing() && validate(&self.draft).is_ok()
    }

    /// Validate and move to `Submitting`. Invalid drafts stay in `Editing`
    /// with their issues recorded per field.
    pub fn begin_submission(&mut self) -> Result<(u64, DemoRequest), FormError> {
        if !self.phase.is_editing() {
            return Err(FormError::Busy);
        }
        match validate(&self.draft) {
            Ok(request) => {
                self.cycle += 1;
                self.errors = ValidationErrors::default();
                self.banner = None;
                self.phase = FormPhase::Submitting { cycle: self.cycle };
                Ok((self.cycle, request))
            }
            Err(errors) => {
                tracing::debug!(issues = errors.len(), "demo request blocked by validation");
                self.errors = errors.clone();
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Apply the collaborator's answer for `cycle`. Returns `false` (and
    /// changes nothing) when that cycle is no longer in flight.
    pub fn finish_submission(
        &mut self,
        cycle: u64,
        outcome: Result<SubmissionReceipt, SubmissionError>,
    ) -> bool {
        if self.phase != (FormPhase::Submitting { cycle }) {
            tracing::debug!(cycle, "ignoring stale submission result");
            return false;
        }
        match outcome {
            Ok(receipt) => {
                tracing::info!(cycle, reference = %receipt.reference, "demo request submitted");
                self.receipt = Some(receipt);
                self.phase = FormPhase::Submitted { cycle };
            }
            Err(err) => {
                tracing::warn!(cycle, "demo request failed: {err}");
                self.banner = Some(err);
                self.phase = FormPhase::Editing;
            }
        }
        true
    }

    /// Clear the form once the confirmation for `cycle` has been shown long
    /// enough. A timer from an older cycle is a no-op.
    pub fn expire_confirmation(&mut self, cycle: u64) -> bool {
        if self.phase != (FormPhase::Submitted { cycle }) {
            return false;
        }
        self.clear();
        true
    }

    /// Back to an empty `Editing` form, abandoning any cycle in flight.
    pub fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.draft = DemoRequestDraft::default();
        self.errors = ValidationErrors::default();
        self.banner = None;
        self.receipt = None;
        self.phase = FormPhase::Editing;
    }
}

/// Mutable access to a form living in some shared cell.
pub trait FormHandle {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut DemoRequestForm) -> R) -> R;
}

impl FormHandle for Signal<DemoRequestForm> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut DemoRequestForm) -> R) -> R {
        self.with_mut(f)
    }
}

impl FormHandle for Rc<RefCell<DemoRequestForm>> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut DemoRequestForm) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Drive one submit attempt to the end: validate, hand the request to
/// `channel`, record the answer and, after a success, clear the form once
/// `reset_after` has elapsed.
///
/// Returns the cycle that was started. Dropping the future (the owning view
/// unmounting) stops it between steps.
pub async fn submit_and_confirm<H: FormHandle>(
    mut handle: H,
    channel: SubmissionChannel,
    reset_after: Duration,
) -> Result<u64, FormError> {
    let (cycle, request) = handle.with_form(DemoRequestForm::begin_submission)?;

    let outcome = channel.submit(request).await;
    let accepted = outcome.is_ok();
    if !handle.with_form(|form| form.finish_submission(cycle, outcome)) || !accepted {
        return Ok(cycle);
    }

    timing::sleep(reset_after).await;
    handle.with_form(|form| form.expire_confirmation(cycle));
    Ok(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InterestCategory;

    fn filled() -> DemoRequestForm {
        let mut form = DemoRequestForm::new();
        form.update(FormField::Name, "Ada");
        form.update(FormField::Email, "ada@example.com");
        form.update(FormField::Organization, "KTH");
        form.update(FormField::Interest, "student");
        form.set_consent(true);
        form
    }

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            reference: "ref-1".into(),
        }
    }

    #[test]
    fn starts_empty_and_editing() {
        let form = DemoRequestForm::new();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.draft().is_blank());
        assert!(!form.is_ready());
    }

    #[test]
    fn missing_name_blocks_submission() {
        let mut form = DemoRequestForm::new();
        form.update(FormField::Email, "a@b.com");
        form.update(FormField::Organization, "X");
        form.set_consent(true);

        let err = form.begin_submission().unwrap_err();
        assert!(matches!(err, FormError::Invalid(_)));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(
            form.field_error(FormField::Name),
            Some(&ValidationIssue::NameRequired)
        );
        assert_eq!(form.draft().email, "a@b.com");
    }

    #[test]
    fn malformed_email_blocks_submission() {
        let mut form = filled();
        form.update(FormField::Email, "not-an-email");
        assert!(form.begin_submission().is_err());
        assert_eq!(
            form.field_error(FormField::Email),
            Some(&ValidationIssue::EmailInvalid)
        );
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn missing_consent_blocks_submission() {
        let mut form = filled();
        form.set_consent(false);
        let before = form.draft().clone();
        assert!(form.begin_submission().is_err());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft(), &before);
        assert!(form.field_error(FormField::Consent).is_some());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = DemoRequestForm::new();
        let _ = form.begin_submission();
        assert!(form.field_error(FormField::Name).is_some());
        form.update(FormField::Name, "Ada");
        assert!(form.field_error(FormField::Name).is_none());
        assert!(form.field_error(FormField::Email).is_some());
    }

    #[test]
    fn valid_submission_confirms_then_clears() {
        let mut form = filled();
        assert!(form.is_ready());

        let (cycle, request) = form.begin_submission().unwrap();
        assert_eq!(request.interest, InterestCategory::Student);
        assert_eq!(form.phase(), FormPhase::Submitting { cycle });

        assert!(form.finish_submission(cycle, Ok(receipt())));
        assert_eq!(form.phase(), FormPhase::Submitted { cycle });
        assert_eq!(form.receipt(), Some(&receipt()));

        assert!(form.expire_confirmation(cycle));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.draft().is_blank());
        assert!(form.receipt().is_none());
    }

    #[test]
    fn inputs_are_read_only_while_submitting() {
        let mut form = filled();
        let (cycle, _) = form.begin_submission().unwrap();
        assert!(!form.update(FormField::Name, "Grace"));
        assert!(!form.set_consent(false));
        assert_eq!(form.draft().name, "Ada");
        assert_eq!(form.begin_submission().unwrap_err(), FormError::Busy);
        assert_eq!(form.phase(), FormPhase::Submitting { cycle });
    }

    #[test]
    fn failure_keeps_draft_and_raises_banner() {
        let mut form = filled();
        let (cycle, _) = form.begin_submission().unwrap();
        let err = SubmissionError::Server("timeout".into());

        assert!(form.finish_submission(cycle, Err(err.clone())));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.banner(), Some(&err));
        assert_eq!(form.draft().name, "Ada");

        // Retrying clears the banner.
        let (retry, _) = form.begin_submission().unwrap();
        assert!(retry > cycle);
        assert!(form.banner().is_none());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut form = filled();
        let (first, _) = form.begin_submission().unwrap();
        form.reset();
        assert!(!form.finish_submission(first, Ok(receipt())));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn stale_timer_does_not_clear_a_newer_draft() {
        let mut form = filled();
        let (first, _) = form.begin_submission().unwrap();
        form.finish_submission(first, Ok(receipt()));
        assert!(form.expire_confirmation(first));

        form.update(FormField::Name, "Grace");
        form.update(FormField::Email, "grace@example.com");
        form.update(FormField::Organization, "Navy");
        form.set_consent(true);
        let (second, _) = form.begin_submission().unwrap();
        form.finish_submission(second, Ok(receipt()));

        assert!(!form.expire_confirmation(first));
        assert_eq!(form.phase(), FormPhase::Submitted { cycle: second });
        assert_eq!(form.draft().name, "Grace");
    }

    #[test]
    fn draft_field_access() {
        let mut draft = DemoRequestDraft::default();
        draft.set(FormField::Consent, "on".into());
        assert!(draft.consent);
        assert_eq!(draft.value(FormField::Consent), "true");
        draft.set(FormField::Message, "Hej".into());
        assert_eq!(draft.value(FormField::Message), "Hej");
    }

    #[tokio::test(start_paused = true)]
    async fn full_cycle_resets_after_confirmation_delay() {
        let form = Rc::new(RefCell::new(filled()));
        let channel = SubmissionChannel::Simulated {
            latency: Duration::from_millis(600),
        };

        let driver = submit_and_confirm(form.clone(), channel, CONFIRMATION_RESET);
        tokio::pin!(driver);

        // Submitting while the simulated call is pending.
        tokio::select! {
            _ = &mut driver => panic!("finished too early"),
            _ = tokio::time::sleep(Duration::from_millis(100)) => {}
        }
        assert!(matches!(form.borrow().phase(), FormPhase::Submitting { .. }));

        // Submitted once the latency has passed.
        tokio::select! {
            _ = &mut driver => panic!("reset too early"),
            _ = tokio::time::sleep(Duration::from_secs(1)) => {}
        }
        assert!(matches!(form.borrow().phase(), FormPhase::Submitted { .. }));
        assert_eq!(form.borrow().draft().name, "Ada");

        let cycle = driver.await.unwrap();
        assert_eq!(cycle, 1);
        assert_eq!(form.borrow().phase(), FormPhase::Editing);
        assert!(form.borrow().draft().is_blank());
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_draft_never_reaches_the_channel() {
        let form = Rc::new(RefCell::new(DemoRequestForm::new()));
        let result =
            submit_and_confirm(form.clone(), SubmissionChannel::simulated(), CONFIRMATION_RESET)
                .await;
        assert!(matches!(result, Err(FormError::Invalid(_))));
        assert_eq!(form.borrow().phase(), FormPhase::Editing);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_driver_leaves_the_form_alone() {
        let form = Rc::new(RefCell::new(filled()));
        {
            let driver =
                submit_and_confirm(form.clone(), SubmissionChannel::simulated(), CONFIRMATION_RESET);
            tokio::pin!(driver);
            tokio::select! {
                _ = &mut driver => panic!("finished too early"),
                _ = tokio::time::sleep(Duration::from_millis(100)) => {}
            }
        }
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(matches!(form.borrow().phase(), FormPhase::Submitting { .. }));
        assert_eq!(form.borrow().draft().name, "Ada");
    }
}

//! Demo request form: draft state, validation, submission lifecycle and view.

pub mod engine;
pub mod submission;
pub mod validation;
pub mod view;

pub use engine::{
    submit_and_confirm, DemoRequestDraft, DemoRequestForm, FormHandle, FormPhase,
    CONFIRMATION_RESET,
};
pub use submission::{use_submission_channel, SubmissionChannel, SIMULATED_LATENCY};
pub use validation::{validate, FormField, ValidationErrors, ValidationIssue};
pub use view::DemoForm;

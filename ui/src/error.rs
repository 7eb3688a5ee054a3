//! Error types shared across the crate. All of them are recoverable: callers
//! log and fall back, or surface them inline, but never abort rendering.

use thiserror::Error;

use crate::demo::ValidationErrors;
use crate::i18n::{Locale, MessageKey};

/// A catalog lookup that found no message for the requested locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no `{}` translation for `{}`", .locale.code(), .key.id())]
pub struct MissingTranslation {
    pub locale: Locale,
    pub key: MessageKey,
}

/// Failure to build the content catalog from the embedded Fluent sources.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("embedded resource `{0}` is missing")]
    MissingResource(String),
    #[error("resource `{0}` is not valid UTF-8")]
    Encoding(String),
    #[error("failed to parse `{path}`: {count} syntax error(s)")]
    Parse { path: String, count: usize },
    #[error("invalid language identifier `{0}`")]
    LanguageId(String),
    #[error("conflicting messages in `{0}`")]
    Conflict(String),
}

/// Failure reported by the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("the submission endpoint failed: {0}")]
    Server(String),
    #[error("the submission was rejected: {0}")]
    Rejected(String),
}

/// Failure to read or write persisted preferences.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed")]
    Io(#[from] std::io::Error),
    #[error("stored preferences are malformed")]
    Json(#[from] serde_json::Error),
}

/// Why a submit attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a submission is already in progress")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

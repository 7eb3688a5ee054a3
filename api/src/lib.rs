//! Fullstack server functions and the wire contract shared by client and server.
//!
//! The demo request form hands a validated [`DemoRequest`] to
//! [`submit_demo_request`]. On the client this is an HTTP POST with the request
//! serialized as JSON; on the server the request is checked again and logged.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use server_fn::codec::Json;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `local@domain.tld`, no whitespace, exactly one `@`.
static EMAIL_SHAPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Shape check shared by the form and the server.
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// The three audiences a demo can be requested for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestCategory {
    #[default]
    Student,
    Employer,
    School,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; 3] = [
        InterestCategory::Student,
        InterestCategory::Employer,
        InterestCategory::School,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InterestCategory::Student => "student",
            InterestCategory::Employer => "employer",
            InterestCategory::School => "school",
        }
    }
}

impl fmt::Display for InterestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterestCategory {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "student" => Ok(InterestCategory::Student),
            "employer" => Ok(InterestCategory::Employer),
            "school" => Ok(InterestCategory::School),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Returned when a category string is not one of [`InterestCategory::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown interest category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// A validated demo request. Optional fields are `None` rather than empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub interest: InterestCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub consent: bool,
}

impl DemoRequest {
    /// Server-side sanity check. The client validates first, so this only
    /// guards against hand-crafted payloads.
    pub fn check(&self) -> Result<(), String> {
        if !self.consent {
            return Err("consent is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("name is required".into());
        }
        if self.organization.trim().is_empty() {
            return Err("organization is required".into());
        }
        if !is_email_shaped(self.email.trim()) {
            return Err("email is malformed".into());
        }
        Ok(())
    }
}

/// Acknowledgement for an accepted request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
}

impl SubmissionReceipt {
    pub fn generate() -> Self {
        Self {
            reference: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Accept a demo request. Delivery to the sales inbox is not wired up yet, so
/// accepted requests are only logged.
#[server(name = SubmitDemoRequest, input = Json)]
pub async fn submit_demo_request(
    request: DemoRequest,
) -> Result<SubmissionReceipt, ServerFnError> {
    if let Err(reason) = request.check() {
        tracing::warn!(%reason, "rejected demo request");
        return Err(ServerFnError::ServerError(reason));
    }

    let receipt = SubmissionReceipt::generate();
    tracing::info!(
        reference = %receipt.reference,
        interest = %request.interest,
        organization = %request.organization,
        "demo request received"
    );
    Ok(receipt)
}

/// The reason attached to a rejection from [`submit_demo_request`], if `err`
/// is one. Transport and codec failures return `None`.
pub fn rejection_reason(err: &ServerFnError) -> Option<&str> {
    match err {
        ServerFnError::ServerError(reason) => Some(reason),
        _ => None,
    }
}

//! Where validated demo requests go.

use std::time::Duration;

use api::{DemoRequest, SubmissionReceipt};
use dioxus::prelude::*;

use crate::core::timing;
use crate::error::SubmissionError;

/// Round trip of the offline channel.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionChannel {
    /// Log the request and accept it after `latency`. Used when no backend is
    /// bundled (static web builds, tests).
    Simulated { latency: Duration },
    /// POST to the `submit_demo_request` server function.
    Server,
}

impl Default for SubmissionChannel {
    fn default() -> Self {
        Self::simulated()
    }
}

impl SubmissionChannel {
    pub fn simulated() -> Self {
        SubmissionChannel::Simulated {
            latency: SIMULATED_LATENCY,
        }
    }

    pub async fn submit(self, request: DemoRequest) -> Result<SubmissionReceipt, SubmissionError> {
        match self {
            SubmissionChannel::Simulated { latency } => {
                tracing::info!(
                    interest = %request.interest,
                    organization = %request.organization,
                    "simulated demo request submission"
                );
                timing::sleep(latency).await;
                Ok(SubmissionReceipt::generate())
            }
            SubmissionChannel::Server => {
                api::submit_demo_request(request).await.map_err(|err| {
                    match api::rejection_reason(&err) {
                        Some(reason) => SubmissionError::Rejected(reason.to_string()),
                        None => SubmissionError::Server(err.to_string()),
                    }
                })
            }
        }
    }
}

/// Channel provided by the platform crate, or the simulated one.
pub fn use_submission_channel() -> SubmissionChannel {
    try_use_context::<SubmissionChannel>().unwrap_or_default()
}

//! # Workflow Layer
//!
//! Packing hands the day's page to an external automation workflow over a
//! plain webhook and brings back whatever the workflow distilled. The
//! [`WorkflowTrigger`] trait is the seam: [`http::WebhookTrigger`] does the
//! real POST, tests script outcomes through [`fixtures::StubTrigger`].
//!
//! The workflow's answer arrives in whatever shape the automation currently
//! produces; [`report::PackReport::from_response`] normalizes all of the
//! known ones.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod http;
pub mod report;

pub use http::WebhookTrigger;
pub use report::{PackReport, SocialDraft};

/// What gets POSTed to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct PackPayload {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl PackPayload {
    pub fn new(content: String) -> Self {
        Self {
            content,
            timestamp: Utc::now(),
        }
    }
}

/// How a pack submission ended.
///
/// `Pending` is a successful submission whose answer did not arrive in time:
/// the workflow is likely still running and its report may be retrievable
/// later. It is deliberately not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum PackOutcome {
    Completed(PackReport),
    Pending,
}

/// Sends a packed page to the workflow.
pub trait WorkflowTrigger {
    fn submit(&self, payload: &PackPayload) -> Result<PackOutcome>;
}

/// Scripted triggers for tests.
#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::DaybookError;
    use std::cell::RefCell;

    enum StubPlan {
        Complete(PackReport),
        Pending,
        Fail(String),
    }

    /// A trigger that returns a scripted outcome and records every payload.
    pub struct StubTrigger {
        plan: StubPlan,
        pub submitted: RefCell<Vec<PackPayload>>,
    }

    impl StubTrigger {
        pub fn completing(report: PackReport) -> Self {
            Self {
                plan: StubPlan::Complete(report),
                submitted: RefCell::new(Vec::new()),
            }
        }

        pub fn pending() -> Self {
            Self {
                plan: StubPlan::Pending,
                submitted: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                plan: StubPlan::Fail(message.to_string()),
                submitted: RefCell::new(Vec::new()),
            }
        }
    }

    impl WorkflowTrigger for StubTrigger {
        fn submit(&self, payload: &PackPayload) -> Result<PackOutcome> {
            self.submitted.borrow_mut().push(payload.clone());
            match &self.plan {
                StubPlan::Complete(report) => Ok(PackOutcome::Completed(report.clone())),
                StubPlan::Pending => Ok(PackOutcome::Pending),
                StubPlan::Fail(message) => Err(DaybookError::Workflow(message.clone())),
            }
        }
    }
}

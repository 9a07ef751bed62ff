//! The real webhook transport.

use super::{PackOutcome, PackPayload, WorkflowTrigger};
use crate::error::{DaybookError, Result};
use crate::workflow::report::PackReport;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// POSTs pack payloads to a configured webhook URL.
///
/// The timeout doubles as the answer budget: a request that outlives it is
/// reported as [`PackOutcome::Pending`] rather than an error, because the
/// workflow on the other end almost certainly keeps running after we stop
/// waiting.
pub struct WebhookTrigger {
    url: Option<String>,
    client: Client,
}

impl WebhookTrigger {
    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }
}

impl WorkflowTrigger for WebhookTrigger {
    fn submit(&self, payload: &PackPayload) -> Result<PackOutcome> {
        let url = self.url.as_deref().ok_or_else(|| {
            DaybookError::Workflow(
                "No webhook URL configured. Set one with: daybook config webhook-url <url>"
                    .to_string(),
            )
        })?;

        let response = match self.client.post(url).json(payload).send() {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Ok(PackOutcome::Pending),
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        // The body read shares the request timeout; a slow workflow can
        // still time out here after sending headers.
        let body = match response.text() {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Ok(PackOutcome::Pending),
            Err(e) => return Err(e.into()),
        };

        if status == StatusCode::NOT_FOUND {
            return Err(DaybookError::Workflow(
                "Webhook responded 404: the workflow is not armed. Activate it (or press \
                 its listen button for a test run), then pack again."
                    .to_string(),
            ));
        }
        if !status.is_success() {
            return Err(DaybookError::Workflow(format!(
                "Webhook responded {}: {}",
                status, body
            )));
        }

        Ok(PackOutcome::Completed(PackReport::from_response(&body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_without_url_is_a_config_error() {
        let trigger = WebhookTrigger::new(None, Duration::from_secs(1)).unwrap();
        let err = trigger
            .submit(&PackPayload::new("a page".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("daybook config webhook-url"));
    }
}

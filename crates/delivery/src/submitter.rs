//! Single-shot submission of an onboarding record.
//!
//! [`OnboardingSubmitter`] POSTs the JSON-encoded record to the intake
//! endpoint. HTTP 200 and 201 count as success; any other status, and any
//! transport failure, is a [`SubmitError`]. There is no retry: the caller
//! reports a generic failure and the client resubmits.

use std::time::Duration;

use onboard_core::onboarding::OnboardingRecord;

/// Statuses the intake endpoint answers with on success.
const SUCCESS_STATUSES: [u16; 2] = [200, 201];

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for onboarding submission failures.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid submission endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with something other than 200 or 201.
    #[error("Submission endpoint returned HTTP {0}")]
    UnexpectedStatus(u16),
}

// ---------------------------------------------------------------------------
// OnboardingSubmitter
// ---------------------------------------------------------------------------

/// Forwards accepted onboarding records to the intake endpoint.
#[derive(Debug, Clone)]
pub struct OnboardingSubmitter {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl OnboardingSubmitter {
    /// Create a submitter for `endpoint` whose requests give up after
    /// `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let invalid = |reason: String| SubmitError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason,
        };

        let url = reqwest::Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: url,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Submit a record, returning the success status code.
    ///
    /// Failures are logged here, so callers only need to map them to a
    /// user-facing message.
    pub async fn submit(&self, record: &OnboardingRecord) -> Result<u16, SubmitError> {
        match self.try_send(record).await {
            Ok(status) => {
                tracing::info!(
                    endpoint = %self.endpoint,
                    status,
                    services = record.services.len(),
                    "Onboarding record submitted"
                );
                Ok(status)
            }
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "Onboarding submission failed");
                Err(e)
            }
        }
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, record: &OnboardingRecord) -> Result<u16, SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !SUCCESS_STATUSES.contains(&status) {
            return Err(SubmitError::UnexpectedStatus(status));
        }
        Ok(status)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

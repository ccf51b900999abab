use std::fmt;
use std::future::Future;

use crate::form::payload::SubmissionPayload;

#[derive(Debug)]
pub enum SubmitError {
    Network(reqwest::Error),
    Status(u16),
    Decode(reqwest::Error),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(e) => write!(f, "Request failed: {e}"),
            SubmitError::Status(code) => write!(f, "Request failed with status {code}"),
            SubmitError::Decode(e) => write!(f, "Could not read response: {e}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Where submitted payloads go. One call is one attempt; nothing retries.
pub trait FormIntake {
    fn send(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<serde_json::Value, SubmitError>> + Send;
}

/// Posts payloads to the echo API's `/form` route.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn form_url(&self) -> String {
        format!("{}/form", self.base_url)
    }
}

impl FormIntake for ApiClient {
    async fn send(&self, payload: &SubmissionPayload) -> Result<serde_json::Value, SubmitError> {
        let response = self
            .http
            .post(self.form_url())
            .json(payload)
            .send()
            .await
            .map_err(SubmitError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        response.json().await.map_err(SubmitError::Decode)
    }
}

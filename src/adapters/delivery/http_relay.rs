//! HTTP relay adapter. Implements SubmissionGateway by POSTing the message
//! to a form relay endpoint (mail delivery service, serverless function, ...).

use crate::domain::{ContactMessage, DomainError};
use crate::ports::SubmissionGateway;
use reqwest::Client;

/// Delivers contact messages over a JSON POST.
///
/// The relay is expected to answer 2xx on acceptance; anything else is
/// surfaced with the status and response body as the failure reason.
pub struct HttpRelayGateway {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl HttpRelayGateway {
    /// # Arguments
    /// * `endpoint` - Relay URL accepting `{name, email, message}` JSON
    /// * `access_token` - Optional bearer token, when the relay requires one
    pub fn new(endpoint: String, access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            access_token,
        }
    }
}

#[async_trait::async_trait]
impl SubmissionGateway for HttpRelayGateway {
    async fn send_message(&self, message: &ContactMessage) -> Result<(), DomainError> {
        let mut request = self.client.post(&self.endpoint).json(message);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let res = request
            .send()
            .await
            .map_err(|e| DomainError::Submission(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::Submission(format!(
                "Relay error {}: {}",
                status, text
            )));
        }

        Ok(())
    }
}

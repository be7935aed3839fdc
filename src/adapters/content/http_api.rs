//! Content API adapter. Implements ContentSource against an HTTP endpoint
//! returning the three collections as one JSON document.

use crate::domain::{DomainError, PortfolioContent};
use crate::ports::ContentSource;
use reqwest::Client;

/// Fetches the portfolio snapshot from a content API.
pub struct ApiContentSource {
    client: Client,
    endpoint: String,
}

impl ApiContentSource {
    /// `endpoint` answers GET with `{projects, experiences, skills}` JSON.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for ApiContentSource {
    async fn fetch_content(&self) -> Result<PortfolioContent, DomainError> {
        let res = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| DomainError::ContentSource(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::ContentSource(format!(
                "Content API error {}: {}",
                status, text
            )));
        }

        res.json::<PortfolioContent>()
            .await
            .map_err(|e| DomainError::ContentSource(format!("Invalid content payload: {}", e)))
    }
}

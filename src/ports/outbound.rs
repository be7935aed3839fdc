//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ContactMessage, DomainError, PortfolioContent};

/// Submission collaborator. Delivers a visitor's contact message to the
/// site owner.
#[async_trait::async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver one message. The transport (HTTP relay, mail service) is the
    /// adapter's concern.
    ///
    /// # Errors
    /// Returns `DomainError::Submission` with a human-readable reason when
    /// delivery fails. The reason may be blank if the collaborator gave none.
    async fn send_message(&self, message: &ContactMessage) -> Result<(), DomainError>;
}

/// Content source collaborator. Supplies the portfolio collections the page
/// renders (content API, static bundle, ...).
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch all three collections as one snapshot.
    async fn fetch_content(&self) -> Result<PortfolioContent, DomainError>;
}

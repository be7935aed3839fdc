//! Mock submission gateway for testing without a relay.
//!
//! Records calls and returns a scripted outcome. Simulates network latency
//! with configurable delay.

use crate::domain::{ContactMessage, DomainError};
use crate::ports::SubmissionGateway;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

/// Scripted SubmissionGateway.
///
/// Counts invocations and keeps the last delivered message, so tests can
/// assert the at-most-one-in-flight invariant and the payload handed over.
pub struct MockSubmissionGateway {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    /// Failure reason for the next calls; `None` means deliveries succeed.
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
    last: Mutex<Option<ContactMessage>>,
}

impl MockSubmissionGateway {
    /// Create a mock whose deliveries succeed immediately.
    pub fn new() -> Self {
        Self {
            delay_ms: 0,
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    /// Create a mock whose deliveries fail with the given reason. An empty
    /// reason simulates a collaborator that reports nothing useful.
    pub fn failing(reason: impl Into<String>) -> Self {
        let gateway = Self::new();
        *gateway.failure.lock().expect("lock poisoned") = Some(reason.into());
        gateway
    }

    /// Add simulated latency.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Make subsequent deliveries succeed.
    pub fn succeed(&self) {
        *self.failure.lock().expect("lock poisoned") = None;
    }

    /// Number of delivery attempts that reached the gateway.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recently delivered message, if any.
    pub fn last_message(&self) -> Option<ContactMessage> {
        self.last.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockSubmissionGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SubmissionGateway for MockSubmissionGateway {
    async fn send_message(&self, message: &ContactMessage) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().expect("lock poisoned") = Some(message.clone());

        info!(
            from = %message.email,
            delay_ms = self.delay_ms,
            "[MOCK] Simulating contact message delivery"
        );

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match self.failure.lock().expect("lock poisoned").clone() {
            Some(reason) => Err(DomainError::Submission(reason)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_and_payload() {
        let gateway = MockSubmissionGateway::new();
        let message = ContactMessage {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            message: "hi".into(),
        };

        gateway.send_message(&message).await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.last_message(), Some(message));
    }

    #[tokio::test]
    async fn scripted_failure_then_success() {
        let gateway = MockSubmissionGateway::failing("boom");
        let message = ContactMessage::default();

        assert!(gateway.send_message(&message).await.is_err());
        gateway.succeed();
        assert!(gateway.send_message(&message).await.is_ok());
        assert_eq!(gateway.call_count(), 2);
    }
}

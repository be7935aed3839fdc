//! Contact form use case: draft editing, validation, submission lifecycle.
//!
//! Validation is synchronous and pure (see `domain::validation`); only a
//! gateway outcome moves the status machine. At most one submission is in
//! flight at a time.

use crate::domain::validation::validate_contact;
use crate::domain::{
    ContactMessage, DomainError, FormField, SubmissionStatus, ValidationErrors,
};
use crate::ports::SubmissionGateway;
use std::sync::Arc;
use tracing::{info, warn};

/// Banner shown when the gateway fails without a usable reason.
const FALLBACK_SUBMIT_ERROR: &str = "Failed to send message. Please try again later.";

/// Owns the form state for the lifetime of one contact form render.
pub struct ContactFormController {
    gateway: Arc<dyn SubmissionGateway>,
    draft: ContactMessage,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

impl ContactFormController {
    pub fn new(gateway: Arc<dyn SubmissionGateway>) -> Self {
        Self {
            gateway,
            draft: ContactMessage::default(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Write one field and drop its stale validation entry, so the message
    /// disappears as soon as the user starts fixing the field.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.draft.name = value,
            FormField::Email => self.draft.email = value,
            FormField::Message => self.draft.message = value,
        }
        self.errors.clear(field);
    }

    /// Recompute all field errors from the draft. Returns true when clean.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_contact(&self.draft);
        self.errors.is_empty()
    }

    /// Submit the draft to the gateway.
    ///
    /// A submit while one is already in flight is a no-op, and the gateway
    /// is never reached when validation fails. On success the draft resets
    /// to empty strings; on failure it is retained so the visitor need not
    /// retype, and resubmission is allowed immediately.
    pub async fn submit(&mut self) {
        if self.is_submitting() {
            return;
        }
        if !self.validate() {
            return;
        }

        self.status = SubmissionStatus::Submitting;
        match self.gateway.send_message(&self.draft).await {
            Ok(()) => {
                info!("contact message delivered");
                self.draft = ContactMessage::default();
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                warn!(error = %e, "contact message delivery failed");
                self.status = SubmissionStatus::Error(banner_message(e));
            }
        }
    }

    /// Back to an empty editing form (the success screen's "send another
    /// message" action).
    pub fn reset(&mut self) {
        self.draft = ContactMessage::default();
        self.errors = ValidationErrors::default();
        self.status = SubmissionStatus::Idle;
    }
}

/// The collaborator's reason when it gave one, generic fallback otherwise.
fn banner_message(err: DomainError) -> String {
    match err {
        DomainError::Submission(reason) if !reason.trim().is_empty() => reason,
        _ => FALLBACK_SUBMIT_ERROR.to_string(),
    }
}

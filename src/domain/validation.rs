//! Contact form validation rules. Pure functions over the draft.
//!
//! Errors are state for the UI to render inline, never `Err` values.

use crate::domain::entities::{ContactMessage, FormField, ValidationErrors};
use regex::Regex;
use std::sync::LazyLock;

/// Accepts `local@domain.tld` with a letters-only TLD of length >= 2.
/// Deliberately stricter than RFC 5322; kept as the site's policy.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Recompute all field errors from the draft. The returned map replaces any
/// previous one, so stale entries never accumulate.
pub fn validate_contact(draft: &ContactMessage) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }

    if draft.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !is_valid_email(&draft.email) {
        errors.insert(FormField::Email, "Invalid email address");
    }

    if draft.message.trim().is_empty() {
        errors.insert(FormField::Message, "Message is required");
    }

    errors
}

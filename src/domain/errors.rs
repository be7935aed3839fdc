//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Submission gateway error: {0}")]
    Submission(String),

    #[error("Content source error: {0}")]
    ContentSource(String),
}

//! Port traits. API boundaries for the hexagon.
//!
//! Outbound: called by the application into external collaborators.

pub mod outbound;

pub use outbound::{ContentSource, SubmissionGateway};

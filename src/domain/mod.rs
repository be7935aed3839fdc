//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod validation;

pub use entities::{
    ContactMessage, Experience, FormField, LoadState, PortfolioContent, Project, Section,
    SectionRegion, Skill, SkillCategory, SubmissionStatus, ValidationErrors,
};
pub use errors::DomainError;

//! Portfolio content use case: one-shot fetch into a tri-state snapshot.
//!
//! Consumers iterate the collections without null checks: they read as
//! empty slices until the first load succeeds.

use crate::domain::{DomainError, Experience, LoadState, PortfolioContent, Project, SkillCategory};
use crate::ports::ContentSource;
use std::sync::Arc;
use tracing::{info, warn};

/// Page-level message when the collaborator fails without a usable reason.
const FALLBACK_LOAD_ERROR: &str =
    "There was an error loading the portfolio data. Please try again later.";

/// Mediates between the rendering layer and the content source.
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
    state: LoadState,
    content: PortfolioContent,
}

impl ContentLoader {
    /// Starts out `Loading` with empty collections, so rendering code can
    /// iterate before the first fetch resolves.
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            state: LoadState::Loading,
            content: PortfolioContent::default(),
        }
    }

    /// Run one fetch: exactly one source call, no automatic retries.
    /// Calling `load` again is an explicit reload and an independent
    /// request. Dropping the returned future abandons the fetch, so a torn
    /// down view never observes a stale result.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        match self.source.fetch_content().await {
            Ok(content) => {
                info!(
                    projects = content.projects.len(),
                    experiences = content.experiences.len(),
                    skill_categories = content.skills.len(),
                    "portfolio content loaded"
                );
                self.content = content;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                warn!(error = %e, "portfolio content load failed");
                self.state = LoadState::Error(load_error_message(e));
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// The failure message, when the last load failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.content.projects
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.content.experiences
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.content.skills
    }
}

/// The collaborator's reason when it gave one, generic fallback otherwise.
fn load_error_message(err: DomainError) -> String {
    match err {
        DomainError::ContentSource(reason) if !reason.trim().is_empty() => reason,
        _ => FALLBACK_LOAD_ERROR.to_string(),
    }
}

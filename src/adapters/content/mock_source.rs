//! Mock content source for testing without an API or bundle file.
//!
//! Returns a scripted snapshot (or failure) after an optional delay.

use crate::domain::{
    DomainError, Experience, PortfolioContent, Project, Skill, SkillCategory,
};
use crate::ports::ContentSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

/// A small but realistic snapshot for tests and development.
pub fn sample_content() -> PortfolioContent {
    PortfolioContent {
        projects: vec![Project {
            title: "Personal Portfolio".to_string(),
            description: "Single-page portfolio with animated sections".to_string(),
            technologies: vec!["React".to_string(), "Tailwind".to_string()],
            github_url: Some("https://github.com/example/portfolio".to_string()),
            live_url: None,
        }],
        experiences: vec![Experience {
            title: "Software Engineer".to_string(),
            organization: "Example Labs".to_string(),
            location: Some("Dhaka, Bangladesh".to_string()),
            period: "2023 - Present".to_string(),
            description: "Full-stack development".to_string(),
            skills: vec!["Rust".to_string(), "TypeScript".to_string()],
            achievements: vec!["Shipped the v1 platform".to_string()],
        }],
        skills: vec![SkillCategory {
            category: "Frontend Development".to_string(),
            skills: vec![Skill {
                name: "CSS".to_string(),
                level: Some(85),
                experience: Some("4 years".to_string()),
            }],
        }],
    }
}

/// Scripted ContentSource.
pub struct MockContentSource {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    content: PortfolioContent,
    /// Failure reason for the next calls; `None` means fetches succeed.
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MockContentSource {
    /// Create a mock serving [`sample_content`].
    pub fn new() -> Self {
        Self::with_content(sample_content())
    }

    /// Create a mock serving exactly the given snapshot.
    pub fn with_content(content: PortfolioContent) -> Self {
        Self {
            delay_ms: 0,
            content,
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose fetches fail with the given reason. A blank
    /// reason simulates a collaborator that reports nothing useful.
    pub fn failing(reason: impl Into<String>) -> Self {
        let source = Self::new();
        *source.failure.lock().expect("lock poisoned") = Some(reason.into());
        source
    }

    /// Add simulated latency.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Make subsequent fetches succeed.
    pub fn succeed(&self) {
        *self.failure.lock().expect("lock poisoned") = None;
    }

    /// Number of fetches that reached the source.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockContentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ContentSource for MockContentSource {
    async fn fetch_content(&self) -> Result<PortfolioContent, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        info!(delay_ms = self.delay_ms, "[MOCK] Simulating content fetch");

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match self.failure.lock().expect("lock poisoned").clone() {
            Some(reason) => Err(DomainError::ContentSource(reason)),
            None => Ok(self.content.clone()),
        }
    }
}

//! Bundled content source. Reads the portfolio collections from a local
//! JSON file shipped next to the site (the "static bundle" deployment).

use crate::domain::{DomainError, PortfolioContent};
use crate::ports::ContentSource;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-backed ContentSource. The file holds the same
/// `{projects, experiences, skills}` document the content API would serve.
pub struct BundledContentSource {
    path: PathBuf,
}

impl BundledContentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for BundledContentSource {
    async fn fetch_content(&self) -> Result<PortfolioContent, DomainError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ContentSource(format!("read bundle {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw)
            .map_err(|e| DomainError::ContentSource(format!("parse bundle: {}", e)))
    }
}

//! Wiring & DI. Entry point: bootstrap adapters, inject into use cases, run
//! a content smoke-load. No business logic here; the rendering layer embeds
//! the library crate directly.

use dotenv::dotenv;
use folio_core::adapters::content::{ApiContentSource, BundledContentSource};
use folio_core::domain::Section;
use folio_core::ports::ContentSource;
use folio_core::shared::config::AppConfig;
use folio_core::usecases::{ContentLoader, SectionTracker};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_default();

    // --- Content source: bundled file takes precedence over the API ---
    let source: Arc<dyn ContentSource> = if let Some(path) = cfg.content_bundle.as_deref() {
        info!(path, "content source: bundled JSON");
        Arc::new(BundledContentSource::new(path))
    } else if let Some(url) = cfg.content_url.clone() {
        info!(url = %url, "content source: HTTP API");
        Arc::new(ApiContentSource::new(url))
    } else {
        anyhow::bail!("Set FOLIO_CONTENT_URL or FOLIO_CONTENT_BUNDLE (env or .env)");
    };

    let mut loader = ContentLoader::new(source);
    loader.load().await;
    if let Some(message) = loader.error_message() {
        anyhow::bail!("content load failed: {message}");
    }
    info!(
        projects = loader.projects().len(),
        experiences = loader.experiences().len(),
        skill_categories = loader.skills().len(),
        "portfolio content ready"
    );

    let tracker = SectionTracker::new(
        Section::PAGE_ORDER.to_vec(),
        cfg.header_offset_or_default(),
    );
    info!(
        initial = %tracker.active(),
        offset = cfg.header_offset_or_default(),
        "section tracker ready"
    );

    match cfg.relay_url.as_deref() {
        Some(url) => info!(url, "contact relay configured"),
        None => info!("contact relay not configured; contact form disabled"),
    }

    Ok(())
}

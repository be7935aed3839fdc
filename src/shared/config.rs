//! Application configuration. Collaborator endpoints, scroll-spy geometry.

use serde::Deserialize;

/// How far below the viewport top the section activation line sits, in
/// pixels. Compensates for the fixed navigation header.
pub const DEFAULT_HEADER_OFFSET: f64 = 100.0;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Portfolio content API endpoint. Read from FOLIO_CONTENT_URL.
    pub content_url: Option<String>,

    /// Local JSON bundle with the portfolio collections; takes precedence
    /// over the API when set. Read from FOLIO_CONTENT_BUNDLE.
    #[serde(default)]
    pub content_bundle: Option<String>,

    /// Contact relay endpoint. Read from FOLIO_RELAY_URL.
    #[serde(default)]
    pub relay_url: Option<String>,

    /// Optional bearer token for the relay. Read from FOLIO_RELAY_TOKEN.
    #[serde(default)]
    pub relay_token: Option<String>,

    /// Scroll-spy activation offset override in pixels. Read from
    /// FOLIO_HEADER_OFFSET.
    #[serde(default)]
    pub header_offset: Option<f64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("FOLIO"));
        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the scroll-spy offset in pixels. Defaults to
    /// DEFAULT_HEADER_OFFSET if unset.
    pub fn header_offset_or_default(&self) -> f64 {
        self.header_offset.unwrap_or(DEFAULT_HEADER_OFFSET)
    }
}

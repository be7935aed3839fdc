//! Content source adapters. Supply the portfolio collections.

pub mod bundle_json;
pub mod http_api;
pub mod mock_source;

pub use bundle_json::BundledContentSource;
pub use http_api::ApiContentSource;
pub use mock_source::{sample_content, MockContentSource};

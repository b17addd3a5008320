#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod catalog;
mod config;
mod error;
mod fetcher;
mod http;
mod normalize;
mod output;
mod summary;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Fetcher
pub use fetcher::{DefaultL10nFetcher, L10nFetcher};

// Catalog and configuration
pub use catalog::{Catalog, DEFAULT_FILES, DEFAULT_LANGUAGES};
pub use config::{DEFAULT_BASE_URL, DEFAULT_RESOURCE_DIR, FetchConfig};

// Errors
pub use error::{FetchError, FetchResult};

// HTTP seam
pub use http::{HttpBackend, HttpText, ReqwestBackend};

// Building blocks
pub use normalize::normalize_text;
pub use summary::{FetchSummary, FileOutcome, FileReport, LanguageReport};
pub use url::build_resource_url;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

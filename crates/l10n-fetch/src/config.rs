//! Public configuration for the localization fetcher.
//!
//! Describes where resources live upstream and how HTTP requests are made.
//! What gets fetched (languages and file names) lives in [`crate::Catalog`].

use std::time::Duration;

/// Root of the central l10n repository.
pub const DEFAULT_BASE_URL: &str = "https://hg.mozilla.org/l10n-central";

/// Path inside each language repository holding the viewer resources.
pub const DEFAULT_RESOURCE_DIR: &str = "raw-file/default/browser/pdfviewer";

/// Configuration for the localization fetcher.
///
/// Use the builder pattern methods to customize the configuration.
///
/// # Example
///
/// ```
/// use l10n_fetch::FetchConfig;
/// use std::time::Duration;
///
/// let config = FetchConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-build/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Root URL of the l10n repository, without the language segment
    pub(crate) base_url: String,
    /// Path segment between the language code and the file name
    pub(crate) resource_dir: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_dir: DEFAULT_RESOURCE_DIR.to_string(),
            user_agent: concat!("l10n-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl FetchConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root URL of the l10n repository.
    ///
    /// Defaults to `https://hg.mozilla.org/l10n-central`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the path segment placed between the language code and file name.
    #[must_use]
    pub fn with_resource_dir(mut self, dir: impl Into<String>) -> Self {
        self.resource_dir = dir.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 30 seconds. A request that exceeds it counts as a
    /// failed download for that file only.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Root URL of the l10n repository.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

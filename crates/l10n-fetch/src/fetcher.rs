//! The localization fetcher.
//!
//! Languages are processed strictly one after another in catalog order.
//! Within a language every resource file is requested at once and the
//! language is finished when the whole batch has resolved.

use std::path::Path;

use futures_util::future::join_all;
use url::Url;

use crate::catalog::Catalog;
use crate::config::FetchConfig;
use crate::error::FetchResult;
use crate::http::{HttpBackend, HttpText, ReqwestBackend};
use crate::normalize::normalize_text;
use crate::output::{ensure_language_dir, write_resource};
use crate::summary::{FetchSummary, FileOutcome, FileReport, LanguageReport};
use crate::url::build_resource_url;

/// Fetcher using the reqwest HTTP backend.
pub type DefaultL10nFetcher = L10nFetcher<ReqwestBackend>;

/// Downloads every resource in a [`Catalog`] into an output tree.
///
/// Generic over the HTTP backend so tests can substitute canned responses.
/// Production code should use [`DefaultL10nFetcher::new`].
pub struct L10nFetcher<B: HttpBackend> {
    backend: B,
    config: FetchConfig,
    catalog: Catalog,
}

impl DefaultL10nFetcher {
    /// Create a fetcher backed by a real HTTP client.
    pub fn new(config: FetchConfig, catalog: Catalog) -> FetchResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self::with_backend(config, catalog, backend))
    }
}

impl<B: HttpBackend> L10nFetcher<B> {
    /// Create a fetcher with a custom backend.
    pub const fn with_backend(config: FetchConfig, catalog: Catalog, backend: B) -> Self {
        Self {
            backend,
            config,
            catalog,
        }
    }

    /// The catalog this fetcher works through.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Download every catalog resource below `output_root`.
    ///
    /// Resolves once every language has been processed. Missing
    /// translations and transport failures are recorded in the returned
    /// summary; only problems with the output tree (or an unusable base
    /// URL) abort the run.
    pub async fn fetch_all(&self, output_root: &Path) -> FetchResult<FetchSummary> {
        Url::parse(&self.config.base_url)?;

        let mut summary = FetchSummary::default();
        for lang in self.catalog.languages() {
            let report = self.fetch_language(output_root, lang).await?;
            summary.languages.push(report);
        }

        tracing::info!(
            languages = summary.languages.len(),
            written = summary.written(),
            not_translated = summary.not_translated(),
            failed = summary.failed(),
            "Localization import finished"
        );
        Ok(summary)
    }

    /// Like [`fetch_all`](Self::fetch_all), then call `on_complete` once.
    ///
    /// `on_complete` is not called when the run aborts with an error.
    pub async fn fetch_all_then<F>(
        &self,
        output_root: &Path,
        on_complete: F,
    ) -> FetchResult<FetchSummary>
    where
        F: FnOnce(),
    {
        let summary = self.fetch_all(output_root).await?;
        on_complete();
        Ok(summary)
    }

    /// Fetch every file of one language and wait for the whole batch.
    async fn fetch_language(&self, output_root: &Path, lang: &str) -> FetchResult<LanguageReport> {
        tracing::info!("Downloading {lang}...");

        let dir = ensure_language_dir(output_root, lang).await?;

        let batch = self
            .catalog
            .files()
            .iter()
            .map(|file| self.fetch_file(&dir, lang, file));

        let files = join_all(batch)
            .await
            .into_iter()
            .collect::<FetchResult<Vec<_>>>()?;

        Ok(LanguageReport {
            lang: lang.to_string(),
            files,
        })
    }

    async fn fetch_file(&self, dir: &Path, lang: &str, file: &str) -> FetchResult<FileReport> {
        let url = build_resource_url(&self.config, lang, file)?;

        let outcome = match self.backend.get_text(&url).await {
            Ok(HttpText::Body(body)) => {
                let text = normalize_text(&body);
                write_resource(&dir.join(file), &text).await?;
                FileOutcome::Written { bytes: text.len() }
            }
            Ok(HttpText::Status(status)) => {
                tracing::debug!(lang, file, status, "Not translated, skipping");
                FileOutcome::NotTranslated { status }
            }
            Err(e) => {
                tracing::warn!(lang, file, error = %e, "Download failed, skipping");
                FileOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        Ok(FileReport {
            file: file.to_string(),
            outcome,
        })
    }
}

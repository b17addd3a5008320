//! CLI bootstrap - the composition root.
//!
//! Turns parsed arguments into a catalog, a fetch configuration and a
//! ready-to-run fetcher. Command handlers receive the composed context.

use std::path::PathBuf;
use std::time::Duration;

use l10n_fetch::{Catalog, DefaultL10nFetcher, FetchConfig};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root of the output tree.
    pub output: PathBuf,
    /// Languages and files to import.
    pub catalog: Catalog,
    /// Upstream location and HTTP settings.
    pub fetch: FetchConfig,
}

impl CliConfig {
    /// Derive the configuration from command-line arguments.
    ///
    /// `--lang` values narrow the default catalog; an unknown code is an
    /// argument error.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let catalog = if cli.langs.is_empty() {
            Catalog::default()
        } else {
            Catalog::default().only(cli.langs.as_slice())?
        };

        let mut fetch = FetchConfig::new().with_timeout(Duration::from_secs(cli.timeout));
        if let Some(ref base_url) = cli.base_url {
            fetch = fetch.with_base_url(base_url.clone());
        }

        Ok(Self {
            output: cli.output.clone(),
            catalog,
            fetch,
        })
    }
}

/// Fully composed application context for the import command.
pub struct CliContext {
    /// The fetcher, backed by a real HTTP client.
    pub fetcher: DefaultL10nFetcher,
    /// Root of the output tree.
    pub output: PathBuf,
}

/// Bootstrap the CLI application.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let fetcher = DefaultL10nFetcher::new(config.fetch, config.catalog)?;
    Ok(CliContext {
        fetcher,
        output: config.output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_use_full_catalog() {
        let cli = Cli::parse_from(["importl10n", "-o", "out"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.catalog, Catalog::default());
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.fetch.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_lang_narrows_catalog() {
        let cli = Cli::parse_from(["importl10n", "--lang", "sv-SE", "--lang", "ar"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.catalog.languages(), ["ar", "sv-SE"]);
    }

    #[test]
    fn test_unknown_lang_rejected() {
        let cli = Cli::parse_from(["importl10n", "--lang", "klingon"]);
        let err = CliConfig::from_cli(&cli).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_base_url_and_timeout() {
        let cli = Cli::parse_from([
            "importl10n",
            "--base-url",
            "http://localhost:9000/central",
            "--timeout",
            "3",
        ]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.fetch.base_url(), "http://localhost:9000/central");
        assert_eq!(config.fetch.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_bootstrap_builds_context() {
        let cli = Cli::parse_from(["importl10n", "--lang", "de", "-o", "build/l10n"]);
        let ctx = bootstrap(CliConfig::from_cli(&cli).unwrap()).unwrap();
        assert_eq!(ctx.fetcher.catalog().languages(), ["de"]);
        assert_eq!(ctx.output, PathBuf::from("build/l10n"));
    }
}

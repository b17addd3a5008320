//! Error types for localization fetching.
//!
//! Only filesystem and configuration problems surface as errors to the
//! caller. Transport failures for individual files are recorded in the
//! run summary instead (see [`crate::FileOutcome`]).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors related to fetching and storing localization resources.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request was sent but no usable response came back
    /// (connection, TLS, timeout, or body read failure).
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// The URL that was requested
        url: String,
        /// Description of the failure
        message: String,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Reading or writing the output tree failed.
    #[error("Cannot write {path}: {source}")]
    Io {
        /// The path being created or written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A language code was requested that the catalog does not contain.
    #[error("Language '{0}' is not in the catalog")]
    UnknownLanguage(String),
}

impl FetchError {
    /// Wrap an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a transport error for `url`.
    pub(crate) fn transport(url: &url::Url, message: impl ToString) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether this error came from the output tree rather than the network.
    pub const fn is_filesystem(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::NotADirectory(_))
    }
}

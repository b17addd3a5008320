//! CLI-specific error types and mappings.
//!
//! Maps library errors to exit codes and user-facing messages.

use l10n_fetch::FetchError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (unknown language, bad URL).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error while writing the output tree.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (HTTP client could not be set up).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::UnknownLanguage(_) | FetchError::InvalidUrl(_) => {
                CliError::Arguments(err.to_string())
            }
            FetchError::Io { .. } | FetchError::NotADirectory(_) => CliError::Io(err.to_string()),
            FetchError::Network(_) | FetchError::Transport { .. } => {
                CliError::Config(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Import viewer translations from the central l10n repository.
///
/// Downloads the resource files of every catalog language into
/// `<output>/<lang>/`, one language at a time.
#[derive(Parser, Debug)]
#[command(name = "importl10n")]
#[command(about = "Import viewer translations from the central l10n repository")]
#[command(version)]
pub struct Cli {
    /// Directory that receives one subdirectory per language
    #[arg(short, long, env = "L10N_OUTPUT_DIR", default_value = "l10n")]
    pub output: PathBuf,

    /// Only import this language (repeatable)
    #[arg(long = "lang", value_name = "CODE")]
    pub langs: Vec<String>,

    /// Root URL of the l10n repository
    #[arg(long = "base-url", env = "L10N_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Print the catalog language codes and exit
    #[arg(long)]
    pub list: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

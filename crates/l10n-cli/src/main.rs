//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, then hands a composed context to the
//! matching handler.

use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use l10n_cli::{Cli, CliConfig, CliError, bootstrap, handlers};

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!(e))
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = CliConfig::from_cli(cli)?;

    if cli.list {
        return handlers::list::execute(&config.catalog, &mut std::io::stdout().lock());
    }

    let ctx = bootstrap(config)?;
    handlers::import::execute(&ctx.fetcher, &ctx.output).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match run(&cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

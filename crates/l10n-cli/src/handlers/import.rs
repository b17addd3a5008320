//! Default command: import every catalog language into the output tree.

use std::path::Path;

use l10n_fetch::{FetchSummary, HttpBackend, L10nFetcher};

use crate::error::CliError;

/// Run the import and print a one-line summary.
///
/// Skipped and failed downloads do not make the command fail; they are
/// already logged per file and counted in the summary.
pub async fn execute<B: HttpBackend>(
    fetcher: &L10nFetcher<B>,
    output: &Path,
) -> Result<FetchSummary, CliError> {
    let summary = fetcher
        .fetch_all_then(output, || {
            tracing::debug!(output = %output.display(), "All languages processed");
        })
        .await?;

    println!("Imported into {}: {summary}", output.display());
    Ok(summary)
}

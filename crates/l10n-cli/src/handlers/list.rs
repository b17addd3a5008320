//! `--list`: print catalog language codes, one per line.

use std::io::Write;

use l10n_fetch::Catalog;

use crate::error::CliError;

/// Write the catalog's language codes to `out` in processing order.
pub fn execute(catalog: &Catalog, out: &mut impl Write) -> Result<(), CliError> {
    for lang in catalog.languages() {
        writeln!(out, "{lang}")?;
    }
    Ok(())
}

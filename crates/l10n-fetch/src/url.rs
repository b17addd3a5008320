//! URL construction for l10n repository resources.

use crate::config::FetchConfig;
use crate::error::FetchResult;
use url::Url;

/// Build the raw-file URL for one resource of one language.
///
/// The result has the shape `<base>/<lang>/<resource_dir>/<file>`. Slashes
/// around the configured pieces are tolerated so `base_url` may or may not
/// end with `/`.
pub fn build_resource_url(config: &FetchConfig, lang: &str, file: &str) -> FetchResult<Url> {
    let base = config.base_url.trim_end_matches('/');
    let dir = config.resource_dir.trim_matches('/');

    let raw = if dir.is_empty() {
        format!("{base}/{lang}/{file}")
    } else {
        format!("{base}/{lang}/{dir}/{file}")
    };

    Ok(Url::parse(&raw)?)
}

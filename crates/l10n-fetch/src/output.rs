//! Output tree handling: one directory per language, one file per resource.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{FetchError, FetchResult};

/// Ensure `root/<lang>` exists as a directory and return its path.
///
/// An existing directory is reused as-is. Missing parents are created.
pub async fn ensure_language_dir(root: &Path, lang: &str) -> FetchResult<PathBuf> {
    let dir = root.join(lang);

    match tokio::fs::metadata(&dir).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(FetchError::NotADirectory(dir)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tokio::fs::create_dir_all(&dir)
                .await
                .map_err(|e| FetchError::io(&dir, e))?;
        }
        Err(e) => return Err(FetchError::io(&dir, e)),
    }

    Ok(dir)
}

/// Write normalized resource text, replacing any existing file.
pub async fn write_resource(path: &Path, text: &str) -> FetchResult<()> {
    tokio::fs::write(path, text)
        .await
        .map_err(|e| FetchError::io(path, e))
}

//! End-to-end runs of the fetcher over the full default catalog against an
//! in-memory upstream.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use l10n_fetch::{
    Catalog, FetchConfig, FetchError, FetchResult, FileOutcome, HttpBackend, HttpText,
    L10nFetcher, build_resource_url,
};
use tempfile::TempDir;
use url::Url;

/// Upstream that serves a fixed set of URLs and answers 404 for the rest.
struct MemoryUpstream {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl MemoryUpstream {
    fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn serve(mut self, config: &FetchConfig, lang: &str, file: &str, body: &str) -> Self {
        let url = build_resource_url(config, lang, file).unwrap();
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl HttpBackend for MemoryUpstream {
    async fn get_text(&self, url: &Url) -> FetchResult<HttpText> {
        self.requested.lock().unwrap().push(url.to_string());
        Ok(self
            .pages
            .get(url.as_str())
            .map_or(HttpText::Status(404), |body| HttpText::Body(body.clone())))
    }
}

fn assert_normalized(path: &Path) {
    let text = fs::read_to_string(path).unwrap();
    assert!(!text.contains('\r'), "{} has CR", path.display());
    assert!(!text.contains('\u{FEFF}'), "{} has BOM", path.display());
}

#[tokio::test]
async fn test_full_catalog_tree() {
    let root = TempDir::new().unwrap();
    let config = FetchConfig::new();
    let upstream = MemoryUpstream::new()
        .serve(&config, "de", "viewer.properties", "\u{FEFF}open_file=Datei öffnen\r\n")
        .serve(&config, "de", "chrome.properties", "unsupported=Nicht unterstützt\r\n")
        .serve(&config, "fr", "viewer.properties", "open_file=Ouvrir\rprint=Imprimer\r")
        .serve(&config, "zh-TW", "viewer.properties", "open_file=開啟檔案\n");
    let fetcher = L10nFetcher::with_backend(config, Catalog::default(), upstream);

    let summary = fetcher.fetch_all(root.path()).await.unwrap();

    let catalog = Catalog::default();
    for lang in catalog.languages() {
        assert!(root.path().join(lang).is_dir(), "no directory for {lang}");
    }
    assert_eq!(summary.languages.len(), catalog.languages().len());
    assert_eq!(summary.written(), 4);
    assert_eq!(summary.failed(), 0);
    assert_eq!(
        summary.not_translated(),
        catalog.languages().len() * catalog.files().len() - 4
    );

    for (lang, file) in [
        ("de", "viewer.properties"),
        ("de", "chrome.properties"),
        ("fr", "viewer.properties"),
        ("zh-TW", "viewer.properties"),
    ] {
        assert_normalized(&root.path().join(lang).join(file));
    }
    assert_eq!(
        fs::read_to_string(root.path().join("fr/viewer.properties")).unwrap(),
        "open_file=Ouvrir\nprint=Imprimer\n"
    );
    assert!(!root.path().join("fr/chrome.properties").exists());
    assert!(!root.path().join("ach/viewer.properties").exists());
}

#[tokio::test]
async fn test_requests_follow_catalog_order() {
    let root = TempDir::new().unwrap();
    let catalog = Catalog::default().only(&["uk", "ach", "pt-BR"]).unwrap();
    let fetcher = L10nFetcher::with_backend(FetchConfig::new(), catalog, MemoryUpstream::new());

    let summary = fetcher.fetch_all(root.path()).await.unwrap();

    let order: Vec<&str> = summary.languages.iter().map(|l| l.lang.as_str()).collect();
    assert_eq!(order, ["ach", "pt-BR", "uk"]);
    assert!(summary.languages.iter().all(|l| {
        l.files
            .iter()
            .all(|f| f.outcome == FileOutcome::NotTranslated { status: 404 })
    }));
}

#[tokio::test]
async fn test_second_run_produces_identical_tree() {
    let root = TempDir::new().unwrap();
    let config = FetchConfig::new();
    let catalog = Catalog::default().only(&["es-ES", "it"]).unwrap();
    let upstream = || {
        MemoryUpstream::new()
            .serve(&config, "es-ES", "viewer.properties", "a=1\r\nb=2\r\n")
            .serve(&config, "it", "chrome.properties", "\u{FEFF}c=3")
    };

    let snapshot = |root: &Path| {
        let mut files = Vec::new();
        for lang in ["es-ES", "it"] {
            for entry in fs::read_dir(root.join(lang)).unwrap() {
                let path = entry.unwrap().path();
                files.push((path.clone(), fs::read(&path).unwrap()));
            }
        }
        files.sort();
        files
    };

    L10nFetcher::with_backend(config.clone(), catalog.clone(), upstream())
        .fetch_all(root.path())
        .await
        .unwrap();
    let first = snapshot(root.path());

    L10nFetcher::with_backend(config.clone(), catalog, upstream())
        .fetch_all(root.path())
        .await
        .unwrap();
    let second = snapshot(root.path());

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unwritable_output_aborts() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("l10n");
    fs::write(&root, "a file, not a directory").unwrap();
    let catalog = Catalog::new(&["xx"], &["a.properties"]);
    let fetcher = L10nFetcher::with_backend(FetchConfig::new(), catalog, MemoryUpstream::new());

    let result = fetcher.fetch_all(&root).await;
    let err = result.unwrap_err();
    assert!(err.is_filesystem());
    assert!(matches!(err, FetchError::Io { .. }));
}

//! The set of languages and resource files to import.

use crate::error::{FetchError, FetchResult};

/// Every language with a viewer translation in the central l10n repository.
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "ach", "af", "ak", "an", "ar", "ast", "az", "be", "bg", "bn-BD", "bn-IN", "br", "brx", "bs",
    "ca", "cak", "cs", "csb", "cy", "da", "de", "el", "en-CA", "en-GB", "eo", "es-AR", "es-CL",
    "es-ES", "es-MX", "et", "eu", "fa", "ff", "fi", "fr", "fy-NL", "ga-IE", "gd", "gl", "gn",
    "gu-IN", "he", "hi-IN", "hr", "hsb", "hto", "hu", "hy-AM", "ia", "id", "is", "it", "ja", "ka",
    "kab", "kk", "km", "kn", "ko", "kok", "ks", "ku", "lg", "lij", "lo", "lt", "ltg", "lv", "meh",
    "mk", "mn", "mr", "ms", "my", "nb-NO", "ne-NP", "nl", "nn-NO", "nso", "oc", "pa-IN", "pl",
    "pt-BR", "pt-PT", "rm", "ro", "ru", "rw", "sah", "sat", "si", "sk", "sl", "son", "sq", "sr",
    "sv-SE", "sw", "ta", "ta-LK", "te", "th", "tl", "tn", "tr", "tsz", "uk", "ur", "uz", "vi",
    "wo", "xh", "zam", "zh-CN", "zh-TW", "zu",
];

/// Resource files fetched for every language.
pub const DEFAULT_FILES: &[&str] = &["chrome.properties", "viewer.properties"];

/// Immutable description of what to import: languages in processing order
/// and the file names fetched for each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    languages: Vec<String>,
    files: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGES, DEFAULT_FILES)
    }
}

impl Catalog {
    /// Build a catalog from explicit language codes and file names.
    pub fn new<L, F>(languages: &[L], files: &[F]) -> Self
    where
        L: AsRef<str>,
        F: AsRef<str>,
    {
        Self {
            languages: languages.iter().map(|l| l.as_ref().to_string()).collect(),
            files: files.iter().map(|f| f.as_ref().to_string()).collect(),
        }
    }

    /// Restrict the catalog to the given codes.
    ///
    /// The result keeps catalog order regardless of the order of `codes`.
    /// Asking for a code the catalog doesn't know is an error.
    pub fn only<S: AsRef<str>>(&self, codes: &[S]) -> FetchResult<Self> {
        if let Some(unknown) = codes
            .iter()
            .map(AsRef::as_ref)
            .find(|code| !self.contains(code))
        {
            return Err(FetchError::UnknownLanguage(unknown.to_string()));
        }

        let languages = self
            .languages
            .iter()
            .filter(|lang| codes.iter().any(|c| c.as_ref() == lang.as_str()))
            .cloned()
            .collect();

        Ok(Self {
            languages,
            files: self.files.clone(),
        })
    }

    /// Whether `code` is one of the catalog languages.
    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l == code)
    }

    /// Language codes in processing order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// File names fetched per language.
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

//! Per-run reporting of what happened to each resource.

use std::fmt;

/// How a single (language, file) download resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Fetched with status 200 and written to the output tree.
    Written {
        /// Size of the normalized text in bytes
        bytes: usize,
    },
    /// Upstream has no translation of this file for this language.
    NotTranslated {
        /// The non-200 status that was returned
        status: u16,
    },
    /// No response could be obtained. Nothing was written.
    Failed {
        /// Description of the transport failure
        reason: String,
    },
}

/// Outcome of one file within a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub outcome: FileOutcome,
}

/// All outcomes for one language, in catalog file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageReport {
    pub lang: String,
    pub files: Vec<FileReport>,
}

impl LanguageReport {
    /// Look up the outcome for `file`.
    pub fn outcome(&self, file: &str) -> Option<&FileOutcome> {
        self.files.iter().find(|f| f.file == file).map(|f| &f.outcome)
    }
}

/// Result of a complete run, languages in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub languages: Vec<LanguageReport>,
}

impl FetchSummary {
    /// Report for `lang`, if it was processed.
    pub fn language(&self, lang: &str) -> Option<&LanguageReport> {
        self.languages.iter().find(|l| l.lang == lang)
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.languages
            .iter()
            .flat_map(|l| &l.files)
            .filter(|f| pred(&f.outcome))
            .count()
    }

    /// Number of files written.
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Written { .. }))
    }

    /// Number of files upstream doesn't have.
    pub fn not_translated(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NotTranslated { .. }))
    }

    /// Number of files that could not be downloaded.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }
}

impl fmt::Display for FetchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} languages: {} written, {} not translated, {} failed",
            self.languages.len(),
            self.written(),
            self.not_translated(),
            self.failed()
        )
    }
}

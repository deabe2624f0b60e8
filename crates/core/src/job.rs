use std::path::PathBuf;

use serde::Serialize;

use crate::catalog::Language;

/// One file to translate. Created per discovered input file, consumed once by
/// the conversation driver, and discarded after its output is written.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationJob {
    /// Path of the source file, relative to the input root.
    pub relative_path: PathBuf,
    /// Full decoded text of the source file.
    pub source_text: String,
    pub source_language: Language,
    pub target_language: Language,
}

impl TranslationJob {
    pub fn new(
        relative_path: impl Into<PathBuf>,
        source_text: impl Into<String>,
        source_language: Language,
        target_language: Language,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            source_text: source_text.into(),
            source_language,
            target_language,
        }
    }
}

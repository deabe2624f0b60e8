use std::path::{Path, PathBuf};

use crate::catalog::{Language, FALLBACK_EXTENSION};

/// Compute the output path for a source file, relative to the output root.
///
/// The final extension is replaced with the target language's canonical one,
/// preserving the directory structure (`pkg/util.py` becomes `pkg/util.go`
/// when the target is Go). Files without an extension gain one.
pub fn output_rel_path(relative: &Path, target: Language) -> PathBuf {
    output_rel_path_with_ext(relative, target.extension())
}

/// Same as [`output_rel_path`] but with an explicit extension, used with
/// [`FALLBACK_EXTENSION`] when the target has no catalog entry.
pub fn output_rel_path_with_ext(relative: &Path, extension: &str) -> PathBuf {
    relative.with_extension(extension)
}

/// Extension applied when the target language is not in the catalog.
pub fn fallback_extension() -> &'static str {
    FALLBACK_EXTENSION
}

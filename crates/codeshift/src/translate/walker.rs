use std::path::{Path, PathBuf};

use crate::prelude::*;
use codeshift_core::text::decode_source;
use ignore::WalkBuilder;

/// Enumerate every regular file under `root`, returned as paths relative to
/// `root`, sorted so runs are reproducible.
///
/// Standard filters are disabled: hidden files are included and ignore files
/// are not consulted, since the input tree is translated wholesale.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        let entry = entry.map_err(|e| Error::Walk(e.to_string()))?;

        if entry.file_type().is_some_and(|t| t.is_file()) {
            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| Error::Walk(e.to_string()))?;
            files.push(relative.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Read a source file as text. Decoding never fails; see
/// [`codeshift_core::text::decode_source`].
pub async fn read_source(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .wrap_err_with(|| f!("Failed to read file '{}'", path.display()))?;

    Ok(decode_source(&bytes))
}

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::{DocsError, Result};

/// Recursively collects every file under `root` whose name ends with
/// `.{extension}`.
///
/// A missing root yields an empty list. Directory entries are visited in
/// file-name order, depth first, so the result is stable for a given tree.
/// Symbolic links are followed and link cycles are skipped. Any other entry
/// the walk cannot read (a dangling link, a directory without permission)
/// is reported as [`DocsError::File`].
pub fn scan_documents(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        debug!(root = %root.display(), "documentation root missing, nothing to scan");
        return Ok(Vec::new());
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.loop_ancestor().is_some() => {
                debug!(error = %e, "skipping symlink cycle");
                continue;
            }
            Err(e) => {
                return Err(DocsError::File {
                    message: format!("failed to scan documentation tree: {}", e),
                    path: e.path().unwrap_or(root).display().to_string(),
                });
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

//! Document discovery under the protected-folder roots.

use std::fs;
use std::path::{Path, PathBuf};

/// Recognized document extension.
const MARKDOWN_EXTENSION: &str = "md";

/// Enumerate markdown documents beneath each root folder.
///
/// Uses an iterative worklist rather than recursion so deep trees
/// cannot overflow the stack. Roots that do not exist are skipped
/// without error, and an empty result is not an error. Results are
/// sorted for stable reporting.
pub fn scan_markdown_files<P: AsRef<Path>>(roots: &[P]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut worklist: Vec<PathBuf> = roots
        .iter()
        .map(|root| root.as_ref().to_path_buf())
        .filter(|root| root.is_dir())
        .collect();

    while let Some(dir) = worklist.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                worklist.push(path);
            } else if path
                .extension()
                .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

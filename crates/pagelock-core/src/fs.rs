//! Filesystem utilities for atomic document rewrites.

use std::fs;
use std::io;
use std::path::Path;

/// Atomically replace a document's contents.
///
/// Writes to a sibling temp file and renames it into place, so a failed
/// write never leaves a half-converted document behind.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let mut temp_name = path.file_name().map(|n| n.to_os_string()).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")
    })?;
    temp_name.push(".pagelock.tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, contents)?;
    rename_with_fallback(&temp_path, path)
}

/// Atomically rename a file, with fallback for platforms where rename
/// fails if the target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the
/// destination already exists. This function handles that case by
/// removing the destination first and retrying. If the rename
/// ultimately fails, the temp file is cleaned up.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_new_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("doc.md");

        write_atomic(&dest, "# Hello\n").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "# Hello\n");
        // No temp file left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("doc.md");
        fs::write(&dest, "old").unwrap();

        write_atomic(&dest, "new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }
}

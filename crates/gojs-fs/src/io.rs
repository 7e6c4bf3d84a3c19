//! Create-only I/O operations
//!
//! Nothing in here merges into or overwrites an existing directory tree.
//! Every failure carries the path it happened at.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Whether any filesystem entry exists at `path`.
///
/// Symlinks are not followed, so a dangling link still counts as an entry.
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Create a single directory. Fails if it already exists or its parent is missing.
pub fn create_dir(path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "creating directory");
    fs::create_dir(path).map_err(|e| Error::io(path, e))
}

/// Copy the bytes of `from` to `to` verbatim, returning the number of bytes copied.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let bytes = fs::copy(from, to).map_err(|source| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    tracing::debug!(from = %from.display(), to = %to.display(), bytes, "copied file");
    Ok(bytes)
}

/// Write content to a file that must not exist yet.
pub fn write_new(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.sync_all().map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Rename `from` to `to`. Both must be on the same filesystem.
pub fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| Error::io(to, e))
}

/// Recursively remove a directory tree.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
}

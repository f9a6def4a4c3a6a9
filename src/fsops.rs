//! Filesystem primitives the merge walker calls into: copy preserving
//! modification time, rename, directory creation, and mtime access.
//!
//! Modification times are read and compared at seconds resolution, the
//! same resolution the preserved-copy name suffix carries.

use crate::error::MergeError;
use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Modification time of `path` as Unix seconds.
pub fn mtime_seconds(path: &Path) -> Result<i64, MergeError> {
    let metadata = fs::metadata(path).map_err(|e| MergeError::Metadata {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(FileTime::from_last_modification_time(&metadata).unix_seconds())
}

/// Set the modification time of `path` to `unix_seconds`.
pub fn set_mtime(path: &Path, unix_seconds: i64) -> Result<(), MergeError> {
    filetime::set_file_mtime(path, FileTime::from_unix_time(unix_seconds, 0)).map_err(|e| {
        MergeError::SetModified {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

/// Copy `from` to `to`, carrying over the source's modification time.
///
/// `fs::copy` already preserves permission bits; the mtime is restamped
/// explicitly afterwards since the copy itself resets it.
pub fn copy_preserving_mtime(from: &Path, to: &Path) -> Result<(), MergeError> {
    fs::copy(from, to).map_err(|e| MergeError::CopyFile {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })?;
    let mtime = mtime_seconds(from)?;
    set_mtime(to, mtime)
}

/// Rename `from` to `to` (same filesystem; content untouched).
pub fn rename(from: &Path, to: &Path) -> Result<(), MergeError> {
    fs::rename(from, to).map_err(|e| MergeError::RenameFile {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })
}

/// Create `path` as a directory if it does not already exist.
///
/// Only the immediate directory is created; the walker visits parents
/// before children, so intermediate levels already exist.
pub fn ensure_dir(path: &Path) -> Result<(), MergeError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir(path).map_err(|e| MergeError::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}

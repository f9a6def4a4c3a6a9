//! Error types for the directory merge tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while merging source trees into the destination.
///
/// Argument problems are caught before any merge work starts; everything
/// else is a mid-run I/O failure that aborts the run. Nothing here is
/// caught per-file — a partially merged destination is safe to re-run
/// against because ledger state is re-derived from the filesystem.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Source path is not a directory: {path}")]
    SourceNotADirectory { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to rename {from} to {to}: {source}")]
    RenameFile {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to set modification time on {path}: {source}")]
    SetModified {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

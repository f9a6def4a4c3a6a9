//! CLI definitions and pre-flight argument validation. No merge logic.

use crate::error::MergeError;
use clap::Parser;
use std::path::PathBuf;

/// Deepmerge - merge overlapping directory trees
#[derive(Parser)]
#[command(name = "deepmerge")]
#[command(
    about = "Merge directory trees; on conflict the newest version keeps the name and older versions are preserved with their modification times appended"
)]
pub struct Cli {
    /// Destination path
    pub destination: PathBuf,

    /// Source paths
    #[arg(required = true)]
    pub source: Vec<PathBuf>,

    /// Report decisions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Check every source root is an existing directory before any merge
/// work begins. A single bad path aborts the whole run untouched.
pub fn validate_sources(sources: &[PathBuf]) -> Result<(), MergeError> {
    for source in sources {
        if !source.is_dir() {
            return Err(MergeError::SourceNotADirectory {
                path: source.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_accepts_directories() {
        let temp_dir = TempDir::new().unwrap();
        let sources = vec![temp_dir.path().to_path_buf()];

        assert!(validate_sources(&sources).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent");
        let sources = vec![temp_dir.path().to_path_buf(), missing.clone()];

        let err = validate_sources(&sources).unwrap_err();
        match err {
            MergeError::SourceNotADirectory { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_file_as_source() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, b"x").unwrap();

        assert!(validate_sources(&[file]).is_err());
    }
}

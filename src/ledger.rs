//! In-memory ledger of content digests observed per destination path.
//!
//! The ledger exists only for the duration of one merge run. It remembers
//! every digest that has occupied (or been preserved alongside) a
//! destination path, so a conflicting-but-already-seen file is never
//! saved off a second time. It is owned by the merge walker and never
//! touched by anything else.

use crate::error::MergeError;
use crate::hasher::{self, Digest};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Per-run mapping from destination path to the set of digests known to
/// have occupied that path.
///
/// Digest sets keep insertion order and set semantics: recording a digest
/// that is already present is a no-op.
#[derive(Debug, Default)]
pub struct HashLedger {
    entries: HashMap<PathBuf, Vec<Digest>>,
}

impl HashLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `path` is tracked and its current on-disk content is
    /// represented in the ledger. Returns the digest of the file
    /// currently at `path`.
    ///
    /// Always re-reads and re-hashes the file; only the set insertion is
    /// idempotent. A read failure propagates without disturbing entries
    /// for other paths.
    pub fn ensure(&mut self, path: &Path) -> Result<Digest, MergeError> {
        let digest = hasher::hash_file(path)?;
        self.record(path, digest);
        Ok(digest)
    }

    /// Add `digest` to `path`'s digest set if not already present.
    pub fn record(&mut self, path: &Path, digest: Digest) {
        let digests = self.entries.entry(path.to_path_buf()).or_default();
        if !digests.contains(&digest) {
            digests.push(digest);
        }
    }

    /// Whether `digest` has been observed at `path` during this run.
    ///
    /// The walker always calls `ensure` before querying; an untracked
    /// path here is a caller bug.
    pub fn contains(&self, path: &Path, digest: &Digest) -> bool {
        debug_assert!(
            self.entries.contains_key(path),
            "ledger queried for untracked path {:?}",
            path
        );
        self.entries
            .get(path)
            .map(|digests| digests.contains(digest))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::hash_bytes;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_tracks_current_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");
        fs::write(&path, b"content").unwrap();

        let mut ledger = HashLedger::new();
        let digest = ledger.ensure(&path).unwrap();

        assert_eq!(digest, hash_bytes(b"content"));
        assert!(ledger.contains(&path, &digest));
    }

    #[test]
    fn test_ensure_is_idempotent_for_membership() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");
        fs::write(&path, b"content").unwrap();

        let mut ledger = HashLedger::new();
        ledger.ensure(&path).unwrap();
        ledger.ensure(&path).unwrap();

        assert_eq!(ledger.entries[&path].len(), 1);
    }

    #[test]
    fn test_ensure_picks_up_rewritten_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");
        fs::write(&path, b"first").unwrap();

        let mut ledger = HashLedger::new();
        let first = ledger.ensure(&path).unwrap();

        fs::write(&path, b"second").unwrap();
        let second = ledger.ensure(&path).unwrap();

        assert_ne!(first, second);
        // Both digests are retained as history for the path.
        assert!(ledger.contains(&path, &first));
        assert!(ledger.contains(&path, &second));
    }

    #[test]
    fn test_record_deduplicates() {
        let mut ledger = HashLedger::new();
        let path = PathBuf::from("dest/file.txt");
        let digest = hash_bytes(b"content");

        ledger.record(&path, digest);
        ledger.record(&path, digest);

        assert_eq!(ledger.entries[&path].len(), 1);
    }

    #[test]
    fn test_failed_ensure_leaves_other_entries_intact() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.txt");
        fs::write(&good, b"content").unwrap();

        let mut ledger = HashLedger::new();
        let digest = ledger.ensure(&good).unwrap();

        let missing = temp_dir.path().join("missing.txt");
        assert!(ledger.ensure(&missing).is_err());
        assert!(ledger.contains(&good, &digest));
    }
}

//! Content digest computation using BLAKE3.
//!
//! Digests are used purely for content-equality checks during merge
//! reconciliation; collision resistance well beyond accidental-duplicate
//! detection is not required, but BLAKE3 provides it cheaply anyway.

use crate::error::MergeError;
use std::fs::File;
use std::io;
use std::path::Path;

/// Fixed-size content digest of a file's full byte content.
pub type Digest = [u8; 32];

/// Compute the content digest of the file at `path`.
///
/// Hashes incrementally from the open file handle, so arbitrarily large
/// files never need to be held in memory at once.
pub fn hash_file(path: &Path) -> Result<Digest, MergeError> {
    let mut file = File::open(path).map_err(|e| MergeError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = blake3::Hasher::new();
    io::copy(&mut file, &mut hasher).map_err(|e| MergeError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(*hasher.finalize().as_bytes())
}

/// Compute the digest of an in-memory byte slice.
pub fn hash_bytes(content: &[u8]) -> Digest {
    *blake3::hash(content).as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hash_file_matches_hash_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");
        fs::write(&path, b"some file content").unwrap();

        let from_file = hash_file(&path).unwrap();
        let from_bytes = hash_bytes(b"some file content");

        assert_eq!(from_file, from_bytes);
    }

    #[test]
    fn test_different_content_different_digest() {
        assert_ne!(hash_bytes(b"alpha"), hash_bytes(b"beta"));
    }

    #[test]
    fn test_hash_file_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = hash_file(&temp_dir.path().join("absent"));

        assert!(matches!(result, Err(MergeError::ReadFile { .. })));
    }
}

//! Merge walker and reconciliation policy.
//!
//! Each source root is mirrored into the destination tree depth-first.
//! When a relative path exists on both sides, the conflict is resolved by
//! modification time and content digest: the newest version keeps the
//! name, superseded or shadowed versions are preserved under a
//! timestamp-suffixed name, and the [`HashLedger`] prevents the same
//! content from being preserved more than once per run.

use crate::error::MergeError;
use crate::fsops;
use crate::hasher;
use crate::ledger::HashLedger;
use crate::timestamp;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Options for a merge run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Walk and decide without mutating the filesystem. Decisions are
    /// reported as in a real run; the ledger is still updated with the
    /// digests a real run would have recorded, so duplicate-skip
    /// decisions match.
    pub dry_run: bool,
}

/// Counts of reconciliation decisions taken over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Destination path was absent; file copied in.
    pub copied: u64,
    /// Source newer with different content; destination preserved under
    /// a timestamp suffix and replaced.
    pub replaced: u64,
    /// Source newer but byte-identical; source mtime aligned to the
    /// destination's.
    pub retimed: u64,
    /// Destination newer; source content saved under a timestamp suffix.
    pub preserved: u64,
    /// Destination newer but content already known for the path; nothing
    /// written.
    pub skipped_duplicates: u64,
    /// Timestamps equal; treated as no conflict.
    pub unchanged: u64,
}

/// Merge each source root into `destination`, in the order given.
///
/// Destination directories are created as the walk descends. The hash
/// ledger lives for exactly this call, so state from earlier roots
/// carries into later ones but nothing persists across runs. Any I/O
/// failure aborts the run; the destination is left valid but incomplete
/// and a re-run re-derives ledger state from whatever is on disk.
pub fn merge(
    sources: &[PathBuf],
    destination: &Path,
    options: MergeOptions,
) -> Result<MergeStats, MergeError> {
    let mut merger = Merger {
        destination,
        options,
        ledger: HashLedger::new(),
        stats: MergeStats::default(),
    };

    for source in sources {
        merger.merge_root(source)?;
    }

    Ok(merger.stats)
}

struct Merger<'a> {
    destination: &'a Path,
    options: MergeOptions,
    ledger: HashLedger,
    stats: MergeStats,
}

impl Merger<'_> {
    fn merge_root(&mut self, source_root: &Path) -> Result<(), MergeError> {
        println!(
            "####### Processing source {} #######",
            source_root.display()
        );
        info!(source = %source_root.display(), "processing source root");

        // Pre-order traversal: a directory is visited before its
        // contents, so each level only has to create its immediate
        // destination directory. Sibling order is sorted for stable
        // output but carries no semantic weight.
        let walker = WalkDir::new(source_root)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(source_root)
                .expect("walk entries stay under their root");
            let dest = self.destination.join(relative);

            if entry.file_type().is_dir() {
                if !self.options.dry_run {
                    fsops::ensure_dir(&dest)?;
                }
            } else if entry.file_type().is_file() {
                self.reconcile(entry.path(), &dest)?;
            }
            // Symlinks and other node types are not merged.
        }

        Ok(())
    }

    /// Apply the reconciliation policy to one file.
    fn reconcile(&mut self, source: &Path, dest: &Path) -> Result<(), MergeError> {
        if !dest.exists() {
            debug!(source = %source.display(), dest = %dest.display(), "copying new file");
            if self.options.dry_run {
                let digest = hasher::hash_file(source)?;
                self.ledger.record(dest, digest);
            } else {
                fsops::copy_preserving_mtime(source, dest)?;
                self.ledger.ensure(dest)?;
            }
            self.stats.copied += 1;
            return Ok(());
        }

        let s_mod = fsops::mtime_seconds(source)?;
        let d_mod = fsops::mtime_seconds(dest)?;
        let s_hash = hasher::hash_file(source)?;
        let d_hash = self.ledger.ensure(dest)?;

        if s_mod > d_mod {
            if s_hash == d_hash {
                // Identical content under a newer timestamp: align the
                // source's mtime so repeated runs stop seeing it as new.
                self.note(source, "newer but identical; updating modified date");
                if !self.options.dry_run {
                    fsops::set_mtime(source, d_mod)?;
                }
                self.stats.retimed += 1;
            } else {
                self.note(source, "newer and different; save/copy");
                if !self.options.dry_run {
                    fsops::rename(dest, &timestamp::suffixed_path(dest, d_mod))?;
                    fsops::copy_preserving_mtime(source, dest)?;
                }
                // The path now holds the source content; its digest joins
                // the path's history alongside the displaced content's.
                self.ledger.record(dest, s_hash);
                self.stats.replaced += 1;
            }
        } else if s_mod == d_mod {
            // Equal timestamps are treated as no conflict.
            self.stats.unchanged += 1;
        } else if self.ledger.contains(dest, &s_hash) {
            // This content has already been preserved under this path
            // during this run, or is what currently occupies it.
            debug!(source = %source.display(), dest = %dest.display(), "duplicate content; skipping");
            self.stats.skipped_duplicates += 1;
        } else {
            self.note(source, "older but different; saving");
            if !self.options.dry_run {
                fsops::copy_preserving_mtime(source, &timestamp::suffixed_path(dest, s_mod))?;
            }
            self.ledger.record(dest, s_hash);
            self.stats.preserved += 1;
        }

        Ok(())
    }

    fn note(&self, source: &Path, message: &str) {
        if self.options.dry_run {
            println!("{}; {} (dry run)", source.display(), message);
        } else {
            println!("{}; {}", source.display(), message);
        }
    }
}

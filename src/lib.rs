//! Deepmerge: merge overlapping directory trees.
//!
//! Merges one or more source directory trees into a single destination
//! tree. Filename collisions are resolved by modification time and
//! content hash: the newest version of a file keeps its name, and older
//! versions are preserved with their modification times appended to
//! their names. A per-run hash ledger keeps identical content from being
//! preserved more than once.

pub mod cli;
pub mod error;
pub mod fsops;
pub mod hasher;
pub mod ledger;
pub mod logging;
pub mod merge;
pub mod timestamp;

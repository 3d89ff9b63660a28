//! Tree building, filtering, sorting, and layout computation.
//!
//! A single traversal produces a flat, depth-first list of entries. Both the
//! HTML list and the ASCII tree are rendered from that list, so they can never
//! disagree about order or filtering.

mod layout;
pub(crate) mod walk;

use crate::filter::IgnoreRules;
use std::path::PathBuf;

pub use walk::build_tree;

/// A single entry in the rendered directory tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    /// Display name (filename component only).
    pub name: String,
    /// Path as joined from the input directory.
    pub path: PathBuf,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Whether this is the last surviving sibling in its parent group.
    pub is_last: bool,
    /// Pre-computed box-drawing prefix, connector included.
    pub prefix: String,
}

/// Configuration for tree building.
pub struct TreeConfig {
    /// Substring rules for entries to exclude.
    pub ignore: IgnoreRules,
    /// Whether to list a link by its target's type and descend into
    /// linked directories.
    pub follow_symlinks: bool,
}

use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::layout::compute_tree_structure;
use super::{TreeConfig, TreeEntry};

/// Entry data collected during traversal, before layout computation.
#[derive(Debug, Clone)]
pub(super) struct RawEntry {
    pub depth: usize,
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Build the tree from a root path.
///
/// Any I/O failure while listing a directory aborts the whole build. When
/// following links, a link whose target cannot be resolved (dangling, or
/// pointing back at an ancestor) is listed as a file instead.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<Vec<TreeEntry>> {
    let follow = config.follow_symlinks;
    let walker = WalkDir::new(root)
        .follow_links(follow)
        .sort_by(move |a, b| sort_cmp(a, b, follow));

    let ignore = &config.ignore;
    // filter_entry stops the walk from descending into excluded directories,
    // not just from displaying them.
    let iter = walker.into_iter().filter_entry(|entry| {
        // Always allow root
        if entry.depth() == 0 {
            return true;
        }
        if ignore.is_ignored(entry.path()) {
            tracing::debug!("excluded {}", entry.path().display());
            return false;
        }
        true
    });

    let mut raw_entries: Vec<RawEntry> = Vec::new();
    for entry_result in iter {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => match unresolved_link(&e) {
                // Errors bypass filter_entry, so apply the rules here too.
                Some(leaf) if ignore.is_ignored(&leaf.path) => continue,
                Some(leaf) => {
                    tracing::debug!("{}: unresolved link listed as file", leaf.path.display());
                    raw_entries.push(leaf);
                    continue;
                }
                None => {
                    return Err(e).with_context(|| format!("{}: failed to list", root.display()))
                }
            },
        };
        let depth = entry.depth();
        // Skip root itself
        if depth == 0 {
            continue;
        }
        raw_entries.push(RawEntry {
            depth,
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path().to_path_buf(),
            is_dir: entry.file_type().is_dir(),
        });
    }

    tracing::info!("{}: {} entries", root.display(), raw_entries.len());
    Ok(compute_tree_structure(&raw_entries))
}

/// A followed link that walkdir could not resolve, as a leaf entry.
fn unresolved_link(e: &walkdir::Error) -> Option<RawEntry> {
    let path = e.path()?;
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link || e.depth() == 0 {
        return None;
    }
    if e.loop_ancestor().is_none() && fs::metadata(path).is_ok() {
        return None;
    }
    Some(RawEntry {
        depth: e.depth(),
        name: path.file_name()?.to_string_lossy().to_string(),
        path: path.to_path_buf(),
        is_dir: false,
    })
}

/// Whether the entry lists as a directory. walkdir sorts before it follows
/// links, so a link's target is checked here.
fn is_dir_entry(entry: &DirEntry, follow: bool) -> bool {
    let file_type = entry.file_type();
    file_type.is_dir() || (follow && file_type.is_symlink() && entry.path().is_dir())
}

/// Comparison function for walkdir sorting.
/// Directories first, then case-insensitive alpha.
fn sort_cmp(a: &DirEntry, b: &DirEntry, follow: bool) -> Ordering {
    let a_is_dir = is_dir_entry(a, follow);
    let b_is_dir = is_dir_entry(b, follow);

    // Directories before files
    if a_is_dir != b_is_dir {
        return if a_is_dir {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let a_name = a.file_name().to_string_lossy().to_lowercase();
    let b_name = b.file_name().to_string_lossy().to_lowercase();
    a_name.cmp(&b_name)
}

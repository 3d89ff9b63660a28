#![allow(dead_code)]

use filetree::filter::IgnoreRules;
use filetree::render::{render_document, DocumentConfig};
use filetree::tree::{TreeConfig, TreeEntry};
use std::fs;
use tempfile::TempDir;

/// TreeConfig with only the version-control rule.
pub fn default_tree_config() -> TreeConfig {
    tree_config_with(&[])
}

/// TreeConfig with the version-control rule plus `rules`.
pub fn tree_config_with(rules: &[&str]) -> TreeConfig {
    let mut ignore = IgnoreRules::from_rules(rules.iter().copied());
    ignore.extend([filetree::filter::VCS_METADATA_RULE]);
    TreeConfig {
        ignore,
        follow_symlinks: true,
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Names of the direct children of the root, in render order.
pub fn top_level_names(entries: &[TreeEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter(|e| e.depth == 1)
        .map(|e| e.name.as_str())
        .collect()
}

/// Render the HTML document into a String.
pub fn document_text(entries: &[TreeEntry]) -> String {
    let mut buf = Vec::new();
    render_document(&mut buf, entries, &DocumentConfig::default()).unwrap();
    String::from_utf8(buf).unwrap()
}

use super::walk::RawEntry;
use super::TreeEntry;

const BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500} "; // └──
const PIPE: &str = "\u{2502}   "; // │
const BLANK: &str = "    ";

/// Compute is_last flags and prefix strings for all entries.
pub(super) fn compute_tree_structure(raw: &[RawEntry]) -> Vec<TreeEntry> {
    let last_flags = last_sibling_flags(raw);
    let mut entries = Vec::with_capacity(raw.len());

    // ancestor_is_last[d - 1] holds the flag of the open ancestor at depth d.
    let mut ancestor_is_last: Vec<bool> = Vec::new();

    for (entry, is_last) in raw.iter().zip(last_flags) {
        let depth = entry.depth;
        ancestor_is_last.truncate(depth.saturating_sub(1));

        let mut prefix = String::new();
        for &last in &ancestor_is_last {
            prefix.push_str(if last { BLANK } else { PIPE });
        }
        prefix.push_str(if is_last { LAST_BRANCH } else { BRANCH });

        ancestor_is_last.push(is_last);

        entries.push(TreeEntry {
            name: entry.name.clone(),
            path: entry.path.clone(),
            depth,
            is_dir: entry.is_dir,
            is_last,
            prefix,
        });
    }

    entries
}

/// For each entry, whether no later sibling follows it under the same parent.
///
/// Walks backwards: `sibling_follows[d]` records that an entry at depth `d`
/// was seen since the last shallower entry.
fn last_sibling_flags(raw: &[RawEntry]) -> Vec<bool> {
    let mut flags = vec![false; raw.len()];
    let mut sibling_follows: Vec<bool> = Vec::new();

    for (i, entry) in raw.iter().enumerate().rev() {
        let depth = entry.depth;
        if sibling_follows.len() <= depth {
            sibling_follows.resize(depth + 1, false);
        }
        flags[i] = !sibling_follows[depth];
        // Deeper levels seen so far were this entry's children; earlier
        // entries at those depths belong to another parent.
        sibling_follows.truncate(depth + 1);
        sibling_follows[depth] = true;
    }

    flags
}

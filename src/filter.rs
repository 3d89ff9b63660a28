//! Ignore rules: literal substrings matched anywhere in a path.
//!
//! Rules come from a newline-delimited file at the root of the rendered
//! directory (`.gitignore` by default) plus a fixed rule for the git
//! metadata directory. Matching is plain substring containment; there is no
//! glob, anchoring or negation support, so `build` also hides `build_output/`
//! and `.git` also hides `.github/` and `.gitignore`.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Rules file looked up at the root when none is configured.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Always appended after the file's rules.
pub const VCS_METADATA_RULE: &str = ".git";

/// Ordered set of substring rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRules {
    rules: Vec<String>,
}

impl IgnoreRules {
    /// Load rules from `root/file_name`. A missing file yields only the
    /// version-control rule; any other read failure is returned.
    pub fn load(root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        let mut rules = match fs::read_to_string(&path) {
            Ok(text) => parse_rules(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("{}: no ignore file", path.display());
                Vec::new()
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("{}: failed to read ignore file", path.display()))
            }
        };
        rules.push(VCS_METADATA_RULE.to_string());
        tracing::info!("loaded {} ignore rule(s) from {}", rules.len(), path.display());
        Ok(Self { rules })
    }

    /// Build from literal rules, without the version-control rule.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    /// Append extra rules; blank ones would match every path and are skipped.
    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if !pattern.is_empty() {
                self.rules.push(pattern.to_string());
            }
        }
    }

    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// True if any rule occurs anywhere in the path's text.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.rules.iter().any(|rule| text.contains(rule.as_str()))
    }
}

/// Split the rules file into rules. `\n`, `\r\n` and a bare `\r` all end a
/// line. Lines are trimmed and blanks dropped; a comment is a line whose first
/// character is `#`, so an indented `#` stays a literal rule.
fn parse_rules(text: &str) -> Vec<String> {
    text.split(|c: char| c == '\n' || c == '\r')
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

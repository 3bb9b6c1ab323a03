//! Unused public asset detection rule.
//!
//! This is a heuristic. Assets referenced from theme code, config files or
//! dynamically built paths show up as unused.

use std::collections::BTreeSet;

/// Public files that no markdown reference points at, sorted.
pub fn find_unused_assets(public_files: &BTreeSet<String>, refs: &BTreeSet<String>) -> Vec<String> {
    public_files.difference(refs).cloned().collect()
}

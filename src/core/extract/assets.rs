//! Extraction of root-relative asset references from markdown.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::utils::strip_fragment_and_query;

static ASSET_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(/(?P<path>[^\s)]+)\)").unwrap());

/// Every `(/path)` target in `text`, as paths relative to the public root.
///
/// Works for links and images alike. Query strings and fragments are
/// dropped; duplicates collapse.
pub fn extract_asset_refs(text: &str) -> BTreeSet<String> {
    let mut refs = BTreeSet::new();
    collect_asset_refs(text, &mut refs);
    refs
}

/// Like [`extract_asset_refs`], accumulating into an existing set.
pub fn collect_asset_refs(text: &str, refs: &mut BTreeSet<String>) {
    for caps in ASSET_REF_REGEX.captures_iter(text) {
        let Some(path) = caps.name("path") else {
            continue;
        };
        let path = path.as_str();
        if path.starts_with("http://") || path.starts_with("https://") {
            continue;
        }
        let path = strip_fragment_and_query(path).trim_start_matches('/');
        refs.insert(path.to_string());
    }
}

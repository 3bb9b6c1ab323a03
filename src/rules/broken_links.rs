//! Broken markdown link detection rule.

use std::{collections::HashSet, path::Path};

use crate::{
    core::resolve::{Resolution, RouteKind, resolve_route},
    report::BrokenLink,
};

/// Check the routes linked from one markdown file.
///
/// `from` is the linking file relative to the content root. Each distinct
/// route is reported at most once per file, in order of first appearance.
pub fn check_broken_links(from: &str, routes: &[String], content_root: &Path) -> Vec<BrokenLink> {
    let mut seen: HashSet<&str> = HashSet::new();

    routes
        .iter()
        .filter(|&route| seen.insert(route.as_str()))
        .filter_map(|route| match resolve_route(route, content_root, RouteKind::Markdown) {
            Resolution::Broken(candidates) => Some(BrokenLink {
                from: from.to_string(),
                route: route.clone(),
                candidates,
            }),
            Resolution::Root | Resolution::Found => None,
        })
        .collect()
}

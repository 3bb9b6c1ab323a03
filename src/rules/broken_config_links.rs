//! Broken sidebar/nav link detection rule.

use std::{collections::BTreeSet, path::Path};

use crate::{
    core::resolve::{Resolution, RouteKind, resolve_route},
    report::BrokenConfigLink,
};

/// Resolve every unique config route against `content_root`.
///
/// Returns the broken ones sorted by route, and the number of unique routes.
pub fn check_broken_config_links(
    routes: &[String],
    content_root: &Path,
) -> (Vec<BrokenConfigLink>, usize) {
    let unique: BTreeSet<&str> = routes.iter().map(String::as_str).collect();

    let broken = unique
        .iter()
        .filter_map(|route| match resolve_route(route, content_root, RouteKind::Config) {
            Resolution::Broken(candidates) => Some(BrokenConfigLink {
                route: route.to_string(),
                candidates,
            }),
            Resolution::Root | Resolution::Found => None,
        })
        .collect();

    (broken, unique.len())
}

//! Route resolution under the "file or index" convention.
//!
//! A route such as `/guide/intro` is served either by `guide/intro.md` or by
//! `guide/intro/index.md` under the content root. [`route_candidates`] builds
//! that ordered pair without touching the filesystem; [`resolve_route`] probes
//! it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::utils::strip_fragment_and_query;

/// Where a route came from, which decides how it is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// A `link:` value from sidebar/nav config. May carry an explicit `.md`.
    Config,
    /// An inline markdown link target.
    Markdown,
}

/// One physical location that could satisfy a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Candidate {
    /// Path relative to the content root, always `/`-separated.
    pub relative: String,
    #[serde(skip)]
    pub path: PathBuf,
}

impl Candidate {
    fn new(root: &Path, relative: String) -> Self {
        let path = root.join(&relative);
        Self { relative, path }
    }
}

/// Outcome of probing a route's candidates on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The route normalizes to the site root and is never broken.
    Root,
    /// At least one candidate is a regular file.
    Found,
    /// Neither candidate exists; both are reported in probe order.
    Broken([Candidate; 2]),
}

impl Resolution {
    pub fn is_broken(&self) -> bool {
        matches!(self, Resolution::Broken(_))
    }
}

/// Normalize `route` into the root-relative stem shared by both candidates.
///
/// Returns `None` when nothing is left, e.g. for `/`, `/#top` or `/?q=1`.
pub fn normalize_route(route: &str, kind: RouteKind) -> Option<&str> {
    let r = strip_fragment_and_query(route).trim_start_matches('/');
    if r.is_empty() {
        return None;
    }

    let r = r.strip_suffix('/').unwrap_or(r);
    let r = match kind {
        RouteKind::Config => r.strip_suffix(".md").unwrap_or(r),
        RouteKind::Markdown => r,
    };

    (!r.is_empty()).then_some(r)
}

/// Build the two candidate paths for `route`, in probe order:
/// `<root>/<route>.md`, then `<root>/<route>/index.md`.
pub fn route_candidates(route: &str, root: &Path, kind: RouteKind) -> Option<[Candidate; 2]> {
    let stem = normalize_route(route, kind)?;
    Some([
        Candidate::new(root, format!("{stem}.md")),
        Candidate::new(root, format!("{stem}/index.md")),
    ])
}

pub fn resolve_route(route: &str, root: &Path, kind: RouteKind) -> Resolution {
    match route_candidates(route, root, kind) {
        None => Resolution::Root,
        Some(candidates) if candidates.iter().any(|c| c.path.is_file()) => Resolution::Found,
        Some(candidates) => Resolution::Broken(candidates),
    }
}

use crate::{
    core::{extract::SourceRoutes, resolve::Candidate},
    utils::to_posix,
};

/// `tried a.md, a/index.md` for verbose output.
pub fn candidates_note(candidates: &[Candidate; 2]) -> String {
    let tried: Vec<&str> = candidates.iter().map(|c| c.relative.as_str()).collect();
    format!("tried {}", tried.join(", "))
}

/// The config files a route appears in, e.g. `sidebar.js, nav.js`.
pub fn route_sources(route: &str, by_file: &[SourceRoutes]) -> String {
    let sources: Vec<String> = by_file
        .iter()
        .filter(|s| s.contains(route))
        .map(|s| to_posix(&s.source))
        .collect();
    sources.join(", ")
}

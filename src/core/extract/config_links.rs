//! Lexical extraction of `link:` routes from sidebar/nav config sources.
//!
//! No JavaScript parsing happens here. Computed values or unusual quoting are
//! simply not seen.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result};
use regex::Regex;

static LINK_FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\blink\s*:\s*['"](?P<link>[^'"]+)['"]"#).unwrap());

/// Collect every `link: '/…'` / `link: "/…"` value, in order of appearance.
pub fn extract_config_routes(text: &str) -> Vec<String> {
    LINK_FIELD_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.name("link"))
        .map(|m| m.as_str())
        .filter(|link| link.starts_with('/'))
        .map(String::from)
        .collect()
}

/// Routes found in one config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoutes {
    pub source: PathBuf,
    pub routes: Vec<String>,
}

impl SourceRoutes {
    pub fn contains(&self, route: &str) -> bool {
        self.routes.iter().any(|r| r == route)
    }
}

/// Read each config file in order, keeping its routes grouped by file.
pub fn extract_config_routes_by_file<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SourceRoutes>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read link source: {}", path.display()))?;
            Ok(SourceRoutes {
                source: path.to_path_buf(),
                routes: extract_config_routes(&text),
            })
        })
        .collect()
}

/// Read each config file in order and concatenate their routes.
pub fn extract_config_routes_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    Ok(extract_config_routes_by_file(paths)?
        .into_iter()
        .flat_map(|s| s.routes)
        .collect())
}

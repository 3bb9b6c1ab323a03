//! Report records written by each check, and the JSON writer for them.
//!
//! Field order in every struct is the key order in the written file, so
//! reruns over an unchanged tree produce byte-identical output.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::resolve::Candidate;

/// A report that can be written to disk and summarized in one line.
pub trait Report: Serialize {
    /// Name of the count shown in the summary line, e.g. `broken`.
    fn count_label(&self) -> &'static str;
    fn count(&self) -> usize;
}

/// A sidebar/nav route with no page behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenConfigLink {
    pub route: String,
    pub candidates: [Candidate; 2],
}

#[derive(Debug, Serialize)]
pub struct ConfigLinksReport {
    pub content_root: String,
    /// Number of unique routes found in the config files.
    pub routes: usize,
    pub broken: usize,
    pub items: Vec<BrokenConfigLink>,
}

impl Report for ConfigLinksReport {
    fn count_label(&self) -> &'static str {
        "broken"
    }

    fn count(&self) -> usize {
        self.broken
    }
}

/// A markdown link with no page behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    /// Linking file, relative to the content root.
    pub from: String,
    pub route: String,
    pub candidates: [Candidate; 2],
}

#[derive(Debug, Serialize)]
pub struct LinksReport {
    pub content_root: String,
    /// Number of markdown files scanned.
    pub files: usize,
    pub broken: usize,
    pub items: Vec<BrokenLink>,
}

impl Report for LinksReport {
    fn count_label(&self) -> &'static str {
        "broken"
    }

    fn count(&self) -> usize {
        self.broken
    }
}

#[derive(Debug, Serialize)]
pub struct UnusedAssetsReport {
    pub public_root: String,
    pub content_root: String,
    pub public_files: usize,
    pub referenced: usize,
    pub unused_candidates: usize,
    /// Public-root-relative paths, sorted.
    pub items: Vec<String>,
}

impl Report for UnusedAssetsReport {
    fn count_label(&self) -> &'static str {
        "unused_candidates"
    }

    fn count(&self) -> usize {
        self.unused_candidates
    }
}

/// Serialize `report` as 2-space indented JSON.
///
/// Non-ASCII text is written verbatim. A trailing newline is added.
pub fn render_report<R: Report>(report: &R) -> Result<String> {
    let content = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    Ok(format!("{}\n", content))
}

/// Write `report` to `path`, creating parent directories as needed.
pub fn write_report<R: Report>(report: &R, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = render_report(report)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    Ok(())
}

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::utils::relative_posix;

/// Result of scanning a content root for markdown files.
pub struct ScanResult {
    /// Markdown files, in path-component order.
    pub files: Vec<PathBuf>,
    pub ignored_count: usize,
}

/// Fail unless `path` is an existing directory.
pub fn ensure_dir(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} does not exist: {}", what, path.display());
    }
    if !path.is_dir() {
        bail!("{} is not a directory: {}", what, path.display());
    }
    Ok(())
}

/// Collect every `*.md` file under `root`.
///
/// Files whose root-relative path matches one of `ignores` are skipped.
/// Traversal is sorted by file name at each level, so the result is stable
/// across runs and platforms.
pub fn scan_markdown_files(root: &Path, ignores: &[Pattern], verbose: bool) -> Result<ScanResult> {
    ensure_dir(root, "Content root")?;

    let mut files = Vec::new();
    let mut ignored_count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Cannot access path under {}", root.display()))?;
        let path = entry.path();
        if !is_file_entry(&entry) || !is_markdown_file(path) {
            continue;
        }

        let relative = relative_posix(path, root);
        if ignores.iter().any(|p| p.matches(&relative)) {
            ignored_count += 1;
            if verbose {
                eprintln!("{} {}", "ignored:".dimmed(), relative);
            }
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(ScanResult {
        files,
        ignored_count,
    })
}

/// Collect every regular file under `root` as a root-relative `/` path.
pub fn scan_public_files(root: &Path) -> Result<BTreeSet<String>> {
    ensure_dir(root, "Public root")?;

    let mut files = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("Cannot access path under {}", root.display()))?;
        if is_file_entry(&entry) {
            files.insert(relative_posix(entry.path(), root));
        }
    }
    Ok(files)
}

/// Read a source file as UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Regular files, and symlinks whose target is a regular file.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_markdown_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("md"))
}

//! Common utility functions shared across the codebase.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Renders a path with `/` separators, independent of the host platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vpcheck::utils::to_posix;
///
/// assert_eq!(to_posix(Path::new("docs/src")), "docs/src");
/// ```
pub fn to_posix(path: &Path) -> String {
    let s = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(MAIN_SEPARATOR, "/")
    }
}

/// Renders a user-supplied root in canonical `/` form.
///
/// Trailing separators and `.` components are dropped, so `docs/src/` and
/// `./docs/src` both render as `docs/src`. An empty result renders as `.`.
pub fn posix_root(path: &Path) -> String {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        ".".to_string()
    } else {
        to_posix(&cleaned)
    }
}

/// Returns `path` relative to `root` in `/`-separated form.
///
/// Falls back to the full path when `path` does not live under `root`.
pub fn relative_posix(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => to_posix(rel),
        Err(_) => to_posix(path),
    }
}

/// Cuts `s` at the first `#`, then at the first `?`.
pub fn strip_fragment_and_query(s: &str) -> &str {
    let s = s.split('#').next().unwrap_or(s);
    s.split('?').next().unwrap_or(s)
}

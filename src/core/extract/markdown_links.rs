//! Extraction of internal routes from inline markdown links.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static MD_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?P<text>[^\]]+)\]\((?P<link>[^)]+)\)").unwrap());

/// Reduce a raw link target to its URL path.
///
/// Angle brackets and a trailing title are dropped. Targets with a scheme are
/// external and yield `None`; for everything else the path is whatever
/// precedes the first `?` or `#`.
pub fn normalize_href(href: &str) -> Option<&str> {
    let mut href = href.trim();
    if let Some(inner) = href.strip_prefix('<').and_then(|h| h.strip_suffix('>')) {
        href = inner.trim();
    }
    // (url "title")
    if let Some((url, _title)) = href.split_once(' ') {
        href = url.trim();
    }

    if Url::parse(href).is_ok() {
        return None;
    }

    let end = href.find(['?', '#']).unwrap_or(href.len());
    Some(&href[..end])
}

/// Internal routes linked from `text`, in document order.
///
/// Image syntax `![alt](src)` is skipped, as are external and
/// protocol-relative (`//host/…`) targets. Duplicates are kept.
pub fn extract_internal_routes(text: &str) -> Vec<String> {
    let mut routes = Vec::new();
    let mut pos = 0;

    while let Some(caps) = MD_LINK_REGEX.captures_at(text, pos) {
        let whole = caps.get_match();
        if text[..whole.start()].ends_with('!') {
            // `[` is one byte; retry from inside the rejected match.
            pos = whole.start() + 1;
            continue;
        }
        pos = whole.end();

        let Some(link) = caps.name("link") else {
            continue;
        };
        if let Some(path) = normalize_href(link.as_str())
            && path.starts_with('/')
            && !path.starts_with("//")
        {
            routes.push(path.to_string());
        }
    }

    routes
}

//! Regex-based extractors that pull routes and asset references out of
//! source text.
//!
//! - `config_links`: `link:` fields in sidebar/nav config sources
//! - `markdown_links`: inline `[text](/route)` links
//! - `assets`: `(/path)` targets pointing into the public directory

pub mod assets;
pub mod config_links;
pub mod markdown_links;

pub use assets::{collect_asset_refs, extract_asset_refs};
pub use config_links::{
    SourceRoutes, extract_config_routes, extract_config_routes_by_file,
    extract_config_routes_from_files,
};
pub use markdown_links::{extract_internal_routes, normalize_href};

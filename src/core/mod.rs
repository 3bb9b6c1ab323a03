//! Core extraction and resolution engine.
//!
//! ## Module Structure
//!
//! - `extract`: regex extractors for config links, markdown links and assets
//! - `resolve`: route normalization and file-or-index candidate probing
//! - `file_scanner`: sorted traversal of content and public roots

pub mod extract;
pub mod file_scanner;
pub mod resolve;

pub use file_scanner::{
    ScanResult, ensure_dir, read_text, scan_markdown_files, scan_public_files,
};
pub use resolve::{Candidate, Resolution, RouteKind, resolve_route, route_candidates};

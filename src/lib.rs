//! vpcheck - link and asset checker for VitePress documentation
//!
//! vpcheck is a CLI tool and library for keeping a VitePress-style docs tree
//! tidy. It finds sidebar/nav links and inline markdown links that resolve to
//! no page, and public assets that no markdown file references. Each check
//! writes a JSON report and prints a one-line summary.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extractors, route resolver and file scanner
//! - `report`: Report records and JSON writer
//! - `rules`: Detection rules for broken links and unused assets
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
pub mod rules;
pub mod utils;

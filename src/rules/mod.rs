//! Rule implementations for vpcheck.
//!
//! Each function takes only the inputs it needs (extracted routes, scanned
//! file sets, the content root) and returns the findings for one report.
//!
//! ## Module Structure
//!
//! - `broken_config_links`: sidebar/nav routes with no page
//! - `broken_links`: markdown links with no page
//! - `unused_assets`: public files no markdown refers to

pub mod broken_config_links;
pub mod broken_links;
pub mod unused_assets;

pub use broken_config_links::check_broken_config_links;
pub use broken_links::check_broken_links;
pub use unused_assets::find_unused_assets;

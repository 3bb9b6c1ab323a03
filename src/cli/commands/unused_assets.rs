//! Unused-assets command - List public files no markdown refers to.
//!
//! A file counts as referenced when some markdown file under the content
//! root contains `(/its/path)`. Anything referenced only from theme code or
//! config is reported too, so treat the list as candidates for review.

use std::collections::BTreeSet;

use anyhow::Result;
use colored::Colorize;

use super::{CommandResult, Finding, context::CheckContext};
use crate::{
    cli::args::UnusedAssetsCommand,
    core::{extract::collect_asset_refs, read_text, scan_markdown_files, scan_public_files},
    report::{UnusedAssetsReport, write_report},
    rules::find_unused_assets,
    utils::posix_root,
};

pub fn unused_assets(cmd: UnusedAssetsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let public_root = ctx.public_root(cmd.public_root.as_ref());

    let public_files = scan_public_files(&public_root)?;

    let scan = scan_markdown_files(&ctx.content_root, &ctx.ignores, ctx.verbose)?;
    let mut refs = BTreeSet::new();
    for path in &scan.files {
        collect_asset_refs(&read_text(path)?, &mut refs);
    }

    if ctx.verbose {
        eprintln!(
            "{} {} public file(s), {} reference(s) from {} markdown file(s)",
            "note:".bold(),
            public_files.len(),
            refs.len(),
            scan.files.len()
        );
    }

    let items = find_unused_assets(&public_files, &refs);
    let report = UnusedAssetsReport {
        public_root: posix_root(&public_root),
        content_root: posix_root(&ctx.content_root),
        public_files: public_files.len(),
        referenced: refs.len(),
        unused_candidates: items.len(),
        items,
    };
    write_report(&report, &cmd.out)?;

    let findings = report
        .items
        .iter()
        .map(|item| Finding {
            message: "no markdown reference".to_string(),
            location: format!("{}/{}", report.public_root, item),
            note: None,
        })
        .collect();

    Ok(CommandResult::from_report(&cmd.out, &report, findings))
}

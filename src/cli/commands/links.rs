//! Links command - Check inline markdown links.
//!
//! Every markdown file under the content root is scanned for
//! `[text](/route)` links (images excluded), and each route is resolved
//! under the file-or-index convention.

use anyhow::Result;
use colored::Colorize;

use super::{CommandResult, Finding, context::CheckContext, helper::candidates_note};
use crate::{
    cli::args::LinksCommand,
    core::{extract::extract_internal_routes, read_text, scan_markdown_files},
    report::{LinksReport, write_report},
    rules::check_broken_links,
    utils::{posix_root, relative_posix},
};

pub fn links(cmd: LinksCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let scan = scan_markdown_files(&ctx.content_root, &ctx.ignores, ctx.verbose)?;

    let mut items = Vec::new();
    for path in &scan.files {
        let text = read_text(path)?;
        let routes = extract_internal_routes(&text);
        let from = relative_posix(path, &ctx.content_root);
        items.extend(check_broken_links(&from, &routes, &ctx.content_root));
    }

    if ctx.verbose {
        eprintln!(
            "{} scanned {} markdown file(s), {} ignored",
            "note:".bold(),
            scan.files.len(),
            scan.ignored_count
        );
    }

    let report = LinksReport {
        content_root: posix_root(&ctx.content_root),
        files: scan.files.len(),
        broken: items.len(),
        items,
    };
    write_report(&report, &cmd.out)?;

    let findings = report
        .items
        .iter()
        .map(|item| Finding {
            message: format!("broken link \"{}\"", item.route),
            location: item.from.clone(),
            note: Some(candidates_note(&item.candidates)),
        })
        .collect();

    Ok(CommandResult::from_report(&cmd.out, &report, findings))
}

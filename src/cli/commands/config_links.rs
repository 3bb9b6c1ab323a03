//! Config-links command - Check sidebar/nav `link:` routes.
//!
//! Routes are read lexically from the sidebar and nav sources (in that
//! order), deduplicated, and resolved against the content root. Configured
//! links may carry an explicit `.md`.

use anyhow::Result;

use super::{
    CommandResult, Finding,
    context::CheckContext,
    helper::{candidates_note, route_sources},
};
use crate::{
    cli::args::ConfigLinksCommand,
    core::{ensure_dir, extract::extract_config_routes_by_file},
    report::{ConfigLinksReport, write_report},
    rules::check_broken_config_links,
    utils::posix_root,
};

pub fn config_links(cmd: ConfigLinksCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let sidebar = ctx.sidebar(cmd.sidebar.as_ref());
    let nav = ctx.nav(cmd.nav.as_ref());

    ensure_dir(&ctx.content_root, "Content root")?;
    let by_file = extract_config_routes_by_file(&[&sidebar, &nav])?;
    let routes: Vec<String> = by_file.iter().flat_map(|s| s.routes.clone()).collect();
    let (items, unique_routes) = check_broken_config_links(&routes, &ctx.content_root);

    let report = ConfigLinksReport {
        content_root: posix_root(&ctx.content_root),
        routes: unique_routes,
        broken: items.len(),
        items,
    };
    write_report(&report, &cmd.out)?;

    let findings = report
        .items
        .iter()
        .map(|item| Finding {
            message: format!("broken config link \"{}\"", item.route),
            location: route_sources(&item.route, &by_file),
            note: Some(candidates_note(&item.candidates)),
        })
        .collect();

    Ok(CommandResult::from_report(&cmd.out, &report, findings))
}

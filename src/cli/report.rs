//! Console output for finished commands.
//!
//! Stdout gets exactly one summary line per check. Verbose mode lists the
//! findings on stderr in a cargo-like layout, so stdout stays parseable.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, Finding, InitSummary, ReportSummary};
use crate::utils::to_posix;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the outcome of a command to stdout (and findings to stderr when verbose).
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Report(summary) => {
            if verbose {
                print_findings_to(&summary.findings, &mut io::stderr().lock());
            }
            print_summary_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

/// Print the one-line summary: `wrote: <out> (<label>=<count>)`.
pub fn print_summary_to<W: Write>(summary: &ReportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} ({}={})",
        "wrote:".green().bold(),
        to_posix(&summary.out),
        summary.count_label,
        summary.count
    );
}

/// Print findings as `warning: <message>` blocks with location and note.
pub fn print_findings_to<W: Write>(findings: &[Finding], writer: &mut W) {
    for finding in findings {
        let _ = writeln!(writer, "{}: {}", "warning".bold().yellow(), finding.message);
        let _ = writeln!(writer, "  {} {}", "-->".blue(), finding.location);
        if let Some(note) = &finding.note {
            let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), note);
        }
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", to_posix(&summary.created)).green()
    );
}
